//! Content-addressed interning of green tokens and small green nodes.
//!
//! The tables are keyed by the combined hash alone: the 64-bit fingerprint is
//! trusted, and an insertion that collides replaces the previous slot (one
//! slot per hash, no chaining). A hash of 0 is reserved to mean "uncached":
//! oversized nodes get it, and any node containing an uncached child stays
//! uncached too.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use crate::kind::SyntaxKind;

use super::element::GreenElement;
use super::node::GreenNode;
use super::token::GreenToken;

/// Reserved hash marking an element that bypassed the cache.
const UNCACHED: u64 = 0;

/// Child-count ceiling above which node interning stops paying off.
const DEFAULT_MAX_CACHED_NODE_SIZE: usize = 3;

/// A green element paired with its combined hash (0 when uncached).
#[derive(Clone, Debug)]
pub struct CachedElement {
    pub hash: u64,
    pub element: GreenElement,
}

impl CachedElement {
    /// Whether this element bypassed the cache.
    #[inline]
    pub fn is_uncached(&self) -> bool {
        self.hash == UNCACHED
    }
}

/// Intern store for green tokens and small green nodes.
///
/// The cache holds a strong reference to every interned element; retire the
/// cache to release them. Reuse one cache across parses (see
/// [`GreenBuilder::with_cache`](crate::green::GreenBuilder::with_cache)) to
/// share subtrees between trees.
#[derive(Debug)]
pub struct GreenCache {
    max_cached_node_size: usize,
    nodes: FxHashMap<u64, GreenElement>,
    tokens: FxHashMap<u64, GreenElement>,
}

impl Default for GreenCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHED_NODE_SIZE)
    }
}

impl GreenCache {
    /// Creates a cache; nodes with more than `max_cached_node_size` children
    /// bypass interning entirely.
    pub fn new(max_cached_node_size: usize) -> Self {
        Self {
            max_cached_node_size,
            nodes: FxHashMap::default(),
            tokens: FxHashMap::default(),
        }
    }

    /// Number of interned nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of interned tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the shared token for `(kind, text)`, interning it on first
    /// use.
    pub fn get_token(&mut self, kind: SyntaxKind, text: &str) -> CachedElement {
        let hash = hash_token(kind, text);
        let element = self
            .tokens
            .entry(hash)
            .or_insert_with(|| GreenToken::new(kind, text).into())
            .clone();

        CachedElement { hash, element }
    }

    /// Builds or reuses the node over `children[first_child..]`.
    ///
    /// The candidate children are always removed: either moved into a fresh
    /// node or dropped in favour of the cached one. `children` is left
    /// truncated to `first_child`.
    pub fn get_node(
        &mut self,
        kind: SyntaxKind,
        children: &mut Vec<CachedElement>,
        first_child: usize,
    ) -> CachedElement {
        debug_assert!(first_child <= children.len());

        // Past the size gate it's cheaper to just construct the node.
        if children.len() - first_child > self.max_cached_node_size {
            let element = build_node(kind, children, first_child).into();
            return CachedElement { hash: UNCACHED, element };
        }

        let hash = hash_node(kind, &children[first_child..]);
        if hash == UNCACHED {
            // An uncached child poisons the whole candidate.
            let element = build_node(kind, children, first_child).into();
            return CachedElement { hash: UNCACHED, element };
        }

        // Hash hit still needs an identity check against the candidate.
        if let Some(existing) = self.nodes.get(&hash)
            && let Some(node) = existing.as_node()
            && node.kind() == kind
            && node.children().len() == children.len() - first_child
            && node
                .children()
                .iter()
                .zip(&children[first_child..])
                .all(|(cached, candidate)| *cached == candidate.element)
        {
            let element = existing.clone();
            children.truncate(first_child);
            return CachedElement { hash, element };
        }

        let element: GreenElement = build_node(kind, children, first_child).into();
        // One slot per hash: a colliding insertion replaces the old entry.
        self.nodes.insert(hash, element.clone());
        CachedElement { hash, element }
    }
}

/// Moves `children[first_child..]` into a fresh node, truncating `children`.
fn build_node(
    kind: SyntaxKind,
    children: &mut Vec<CachedElement>,
    first_child: usize,
) -> GreenNode {
    let elements: Vec<GreenElement> = children
        .drain(first_child..)
        .map(|cached| cached.element)
        .collect();

    GreenNode::new(kind, elements)
}

/// Combined hash of a token; never 0.
fn hash_token(kind: SyntaxKind, text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    kind.hash(&mut hasher);
    text.hash(&mut hasher);
    nonzero(hasher.finish())
}

/// Combined hash of a candidate node, folding the child hashes in order.
///
/// Returns 0 as soon as any child is uncached.
fn hash_node(kind: SyntaxKind, children: &[CachedElement]) -> u64 {
    let mut hasher = FxHasher::default();
    kind.hash(&mut hasher);
    for child in children {
        if child.hash == UNCACHED {
            return UNCACHED;
        }
        child.hash.hash(&mut hasher);
    }

    nonzero(hasher.finish())
}

/// Remaps the one reserved value; 0 always means "uncached".
#[inline]
fn nonzero(hash: u64) -> u64 {
    if hash == UNCACHED { 1 } else { hash }
}
