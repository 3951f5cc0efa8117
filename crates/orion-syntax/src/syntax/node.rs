//! Positioned node views.

use std::sync::Arc;

use crate::green::{GreenElement, GreenNode};
use crate::kind::SyntaxKind;
use crate::lexer::Span;

use super::SyntaxElement;
use super::token::SyntaxToken;

#[derive(Debug)]
struct SyntaxNodeData {
    offset: usize,
    parent: Option<SyntaxNode>,
    green: GreenNode,
}

/// A positioned view of a green node: absolute codepoint offset, optional
/// parent handle, and the shared green payload.
#[derive(Clone, Debug)]
pub struct SyntaxNode {
    data: Arc<SyntaxNodeData>,
}

impl SyntaxNode {
    /// Wraps `green` as a tree root at offset 0.
    pub fn new_root(green: GreenNode) -> Self {
        Self::new(0, None, green)
    }

    pub fn new(offset: usize, parent: Option<SyntaxNode>, green: GreenNode) -> Self {
        Self { data: Arc::new(SyntaxNodeData { offset, parent, green }) }
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
    pub fn green(&self) -> &GreenNode {
        &self.data.green
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.green.kind()
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

    /// Positioned views of the direct children, in order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxElement> + '_ {
        let mut offset = self.offset();
        self.green().children().iter().filter_map(move |child| {
            let child_offset = offset;
            offset += child.width();
            match child {
                GreenElement::Node(node) => Some(SyntaxElement::Node(SyntaxNode::new(
                    child_offset,
                    Some(self.clone()),
                    node.clone(),
                ))),
                GreenElement::Token(token) => Some(SyntaxElement::Token(SyntaxToken::new(
                    child_offset,
                    Some(self.clone()),
                    token.clone(),
                ))),
                // Well-formed trees carry no empty elements.
                GreenElement::Empty => None,
            }
        })
    }

    /// Positioned views of the direct token children, in order.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.children().filter_map(|element| match element {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        })
    }
}
