//! Shared leaf values of the green tree.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::kind::SyntaxKind;

#[derive(Debug)]
struct GreenTokenData {
    kind: SyntaxKind,
    text: SmolStr,
}

/// Immutable leaf: a kind plus the exact source text it covers.
///
/// Tokens are shared by reference. The cache keeps at most one live instance
/// per `(kind, text)` value, so equality is identity of the shared
/// allocation.
#[derive(Clone, Debug)]
pub struct GreenToken {
    data: Arc<GreenTokenData>,
}

impl GreenToken {
    /// Creates a fresh, uninterned token.
    ///
    /// Go through [`GreenCache::get_token`](crate::green::GreenCache::get_token)
    /// to get the shared instance instead.
    pub fn new(kind: SyntaxKind, text: impl Into<SmolStr>) -> Self {
        Self { data: Arc::new(GreenTokenData { kind, text: text.into() }) }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.data.text
    }

    /// Width of the covered source, in codepoints.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.text.chars().count()
    }

    /// Number of live holders of the underlying data, the cache included.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}

impl PartialEq for GreenToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for GreenToken {}
