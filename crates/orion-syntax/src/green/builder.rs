//! Event-driven construction of green trees.
//!
//! The builder is a stack machine: `start_node` opens a parent, `token`
//! appends leaves, `finish_node` packages the open parent's children through
//! the cache. `checkpoint`/`start_node_at` retroactively wrap
//! already-emitted children when the grammar decides an enclosing node's
//! kind late (operator precedence, left-recursive productions).
//!
//! ## Error handling
//!
//! Misuse (unbalanced events, stale checkpoints, a bad root) surfaces as
//! [`BuildError`] from the detecting operation; the builder never panics on
//! malformed event sequences.

use std::ops::{Deref, DerefMut};

use crate::kind::SyntaxKind;

use super::cache::{CachedElement, GreenCache};
use super::element::GreenElement;
use super::node::GreenNode;

/// Builder misuse taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `finish_node` with no open parent.
    #[error("finish_node called with no open node")]
    EmptyStack,

    /// Checkpoint outside the enclosing open node, or past the child stack.
    #[error("checkpoint no longer valid")]
    InvalidCheckpoint,

    /// `finish` called while parents remain open or siblings remain
    /// unwrapped.
    #[error("finish called with unfinished nodes on the stack")]
    NonEmptyStack,

    /// `finish` found no node at the root.
    #[error("root element is not a node")]
    RootNotNode,
}

/// Opaque marker of a position in the builder's child stream.
///
/// Taken with [`GreenBuilder::checkpoint`], spent with
/// [`GreenBuilder::start_node_at`].
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint(usize);

/// Cache slot that is either owned by the builder or borrowed for reuse
/// across parses.
enum MaybeOwned<'a, T> {
    Owned(T),
    Borrowed(&'a mut T),
}

impl<T> Deref for MaybeOwned<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            MaybeOwned::Owned(it) => it,
            MaybeOwned::Borrowed(it) => it,
        }
    }
}

impl<T> DerefMut for MaybeOwned<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self {
            MaybeOwned::Owned(it) => it,
            MaybeOwned::Borrowed(it) => it,
        }
    }
}

/// Stack-machine builder producing a single root [`GreenNode`].
pub struct GreenBuilder<'cache> {
    cache: MaybeOwned<'cache, GreenCache>,
    parents: Vec<(SyntaxKind, usize)>,
    children: Vec<CachedElement>,
}

impl Default for GreenBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl GreenBuilder<'static> {
    /// Creates a builder with its own cache.
    pub fn new() -> Self {
        Self {
            cache: MaybeOwned::Owned(GreenCache::default()),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl<'cache> GreenBuilder<'cache> {
    /// Creates a builder over a shared cache, so structurally equal subtrees
    /// from earlier parses are reused.
    pub fn with_cache(cache: &'cache mut GreenCache) -> Self {
        Self {
            cache: MaybeOwned::Borrowed(cache),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Opens a node of `kind`; its children are everything emitted until the
    /// matching `finish_node`.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push((kind, self.children.len()));
    }

    /// Appends a token leaf, interned through the cache.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        let token = self.cache.get_token(kind, text);
        self.children.push(token);
    }

    /// Closes the innermost open node, packaging its children.
    pub fn finish_node(&mut self) -> Result<(), BuildError> {
        let (kind, first_child) = self.parents.pop().ok_or(BuildError::EmptyStack)?;
        let node = self.cache.get_node(kind, &mut self.children, first_child);
        self.children.push(node);
        Ok(())
    }

    /// Captures the current child position for a possible retroactive wrap.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.children.len())
    }

    /// Opens a node of `kind` whose children start at `checkpoint`.
    ///
    /// Children emitted since the checkpoint stay in place and are consumed
    /// by the matching `finish_node`; nothing is copied or moved.
    pub fn start_node_at(
        &mut self,
        checkpoint: Checkpoint,
        kind: SyntaxKind,
    ) -> Result<(), BuildError> {
        let Checkpoint(index) = checkpoint;
        if index > self.children.len() {
            return Err(BuildError::InvalidCheckpoint);
        }

        // The wrap may not reach outside its enclosing open node.
        if let Some(&(_, first_child)) = self.parents.last()
            && index < first_child
        {
            return Err(BuildError::InvalidCheckpoint);
        }

        self.parents.push((kind, index));
        Ok(())
    }

    /// Completes the tree, returning the root node.
    pub fn finish(mut self) -> Result<GreenNode, BuildError> {
        if !self.parents.is_empty() || self.children.len() > 1 {
            return Err(BuildError::NonEmptyStack);
        }

        match self.children.pop().map(|cached| cached.element) {
            Some(GreenElement::Node(node)) => Ok(node),
            _ => Err(BuildError::RootNotNode),
        }
    }
}
