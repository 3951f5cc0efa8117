//! Green tree: immutable, offset-free, shared-by-reference syntax data.
//!
//! Green nodes and tokens carry kinds, widths, and children, never absolute
//! positions, so a subtree is the same value wherever it occurs and can be
//! cached across parses. [`GreenCache`] hash-conses tokens and small nodes;
//! [`GreenBuilder`] turns parser events into a single root [`GreenNode`],
//! including retroactive wrapping through checkpoints.
//!
//! Widths are codepoint counts. Equality of shared values is identity of the
//! shared allocation; the cache is what makes structural equality coincide
//! with it.

mod builder;
mod cache;
mod element;
mod node;
mod token;


pub use builder::{BuildError, Checkpoint, GreenBuilder};
pub use cache::{CachedElement, GreenCache};
pub use element::GreenElement;
pub use node::GreenNode;
pub use token::GreenToken;
