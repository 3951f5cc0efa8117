//! Positioned token views.

use std::sync::Arc;

use crate::green::GreenToken;
use crate::kind::SyntaxKind;
use crate::lexer::Span;

use super::node::SyntaxNode;

#[derive(Debug)]
struct SyntaxTokenData {
    offset: usize,
    parent: Option<SyntaxNode>,
    green: GreenToken,
}

/// A positioned view of a green token: absolute codepoint offset, optional
/// parent handle, and the shared green payload.
#[derive(Clone, Debug)]
pub struct SyntaxToken {
    data: Arc<SyntaxTokenData>,
}

impl SyntaxToken {
    pub fn new(offset: usize, parent: Option<SyntaxNode>, green: GreenToken) -> Self {
        Self { data: Arc::new(SyntaxTokenData { offset, parent, green }) }
    }

    /// Absolute offset of the first covered codepoint.
    #[inline]
    pub fn offset(&self) -> usize {
        self.data.offset
    }

    #[inline]
    pub fn parent(&self) -> Option<SyntaxNode> {
        self.data.parent.clone()
    }

    #[inline]
    pub fn green(&self) -> &GreenToken {
        &self.data.green
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.green.kind()
    }

    /// The covered source text.
    #[inline]
    pub fn text(&self) -> &str {
        self.data.green.text()
    }

    /// Width of the covered source, in codepoints.
    #[inline]
    pub fn width(&self) -> usize {
        self.data.green.width()
    }

    /// Covered range in absolute codepoint positions.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.offset(), self.offset() + self.width())
    }
}
