//! Shared interior nodes of the green tree.

use std::sync::Arc;

use crate::kind::SyntaxKind;

use super::element::GreenElement;

#[derive(Debug)]
struct GreenNodeData {
    kind: SyntaxKind,
    width: usize,
    children: Vec<GreenElement>,
}

/// Immutable interior node: kind, cached width, ordered children.
///
/// The width is fixed at construction as the sum of the child widths, so
/// every finished node satisfies the additivity invariant by construction.
/// Nodes are shared by reference; equality is identity of the shared
/// allocation.
#[derive(Clone, Debug)]
pub struct GreenNode {
    data: Arc<GreenNodeData>,
}

impl GreenNode {
    /// Creates a fresh, uninterned node over `children`.
    pub fn new(kind: SyntaxKind, children: Vec<GreenElement>) -> Self {
        let width = children.iter().map(GreenElement::width).sum();
        Self { data: Arc::new(GreenNodeData { kind, width, children }) }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    /// Width of the covered source, in codepoints.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.width
    }

    #[inline]
    pub fn children(&self) -> &[GreenElement] {
        &self.data.children
    }

    /// Number of live holders of the underlying data, the cache included.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}

impl PartialEq for GreenNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for GreenNode {}
