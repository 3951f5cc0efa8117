//! Tagged union over the two green value types.

use crate::kind::SyntaxKind;

use super::node::GreenNode;
use super::token::GreenToken;

/// A child slot in the green tree: node, token, or the empty sentinel.
///
/// `Empty` only stands in for vacant slots; no well-formed tree contains it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GreenElement {
    Node(GreenNode),
    Token(GreenToken),
    #[default]
    Empty,
}

impl GreenElement {
    #[inline]
    pub fn is_node(&self) -> bool {
        matches!(self, GreenElement::Node(_))
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self, GreenElement::Token(_))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, GreenElement::Empty)
    }

    #[inline]
    pub fn as_node(&self) -> Option<&GreenNode> {
        match self {
            GreenElement::Node(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn as_token(&self) -> Option<&GreenToken> {
        match self {
            GreenElement::Token(token) => Some(token),
            _ => None,
        }
    }

    #[inline]
    pub fn into_node(self) -> Option<GreenNode> {
        match self {
            GreenElement::Node(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn into_token(self) -> Option<GreenToken> {
        match self {
            GreenElement::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Kind of the wrapped element, if any.
    #[inline]
    pub fn kind(&self) -> Option<SyntaxKind> {
        match self {
            GreenElement::Node(node) => Some(node.kind()),
            GreenElement::Token(token) => Some(token.kind()),
            GreenElement::Empty => None,
        }
    }

    /// Width in codepoints; `Empty` covers nothing.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            GreenElement::Node(node) => node.width(),
            GreenElement::Token(token) => token.width(),
            GreenElement::Empty => 0,
        }
    }
}

impl From<GreenNode> for GreenElement {
    #[inline]
    fn from(node: GreenNode) -> Self {
        GreenElement::Node(node)
    }
}

impl From<GreenToken> for GreenElement {
    #[inline]
    fn from(token: GreenToken) -> Self {
        GreenElement::Token(token)
    }
}
