//! Red layer: lazy positioned views over green data.
//!
//! Green trees are offset-free and shared; a red view adds an absolute
//! codepoint offset and a parent link for navigation. Views are plain values
//! created on demand and never interned: two views of the same green
//! subtree at different offsets are distinct.

mod node;
mod token;

#[cfg(test)]
mod syntax_tests;

pub use node::SyntaxNode;
pub use token::SyntaxToken;

use crate::kind::SyntaxKind;
use crate::lexer::Span;

/// Positioned view of a green element.
#[derive(Clone, Debug)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    /// Absolute offset of the first covered codepoint.
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            SyntaxElement::Node(node) => node.offset(),
            SyntaxElement::Token(token) => token.offset(),
        }
    }

    /// Width of the covered source, in codepoints.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            SyntaxElement::Node(node) => node.width(),
            SyntaxElement::Token(token) => token.width(),
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    /// Covered range in absolute codepoint positions.
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            SyntaxElement::Node(node) => node.span(),
            SyntaxElement::Token(token) => token.span(),
        }
    }

    #[inline]
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    #[inline]
    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }
}
