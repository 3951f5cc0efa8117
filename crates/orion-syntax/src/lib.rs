//! Lossless syntax front end core for a SQL-flavored language.
//!
//! # Architecture
//!
//! The crate is the substrate an IDE-grade parser sits on top of:
//!
//! - Lossless lexing: every codepoint of the input comes back as part of
//!   exactly one [`Token`], whitespace and newlines included, so the token
//!   stream can rebuild the source verbatim. Positions are codepoint indices,
//!   not byte offsets.
//! - Green trees: immutable, offset-free [`GreenNode`]s and [`GreenToken`]s
//!   shared by reference, with a content-addressed [`GreenCache`] so
//!   structurally equal subtrees are one allocation across parses.
//! - Event-driven building: [`GreenBuilder`] consumes the parser's
//!   `start_node`/`token`/`finish_node` events and supports retroactive
//!   wrapping through checkpoints, the way precedence climbing needs it.
//! - Red views: [`SyntaxNode`]/[`SyntaxToken`] lazily add absolute offsets
//!   and parent links over the shared green data.
//!
//! The grammar itself is out of scope; a parser drives the builder with the
//! kinds it chooses.
//!
//! # Example
//!
//! ```
//! use orion_syntax::{GreenBuilder, Lexer, SyntaxKind, SyntaxNode};
//!
//! let mut lexer = Lexer::new("1 + 2");
//! let mut builder = GreenBuilder::new();
//! builder.start_node(SyntaxKind::Root);
//! while let Some(token) = lexer.try_next_token()? {
//!     builder.token(token.kind().into(), token.source());
//! }
//! builder.finish_node()?;
//! let root = SyntaxNode::new_root(builder.finish()?);
//! assert_eq!(root.width(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod green;
pub mod kind;
pub mod lexer;
pub mod syntax;

pub use green::{
    BuildError, CachedElement, Checkpoint, GreenBuilder, GreenCache, GreenElement, GreenNode,
    GreenToken,
};
pub use kind::SyntaxKind;
pub use lexer::{LexError, Lexer, Span, Token, TokenKind, lex};
pub use syntax::{SyntaxElement, SyntaxNode, SyntaxToken};
