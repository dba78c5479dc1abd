//! Contains the definitions of the syntax trees of the Ember language and
//! their parsing logic.
//!
//! Every syntax tree implements three shared capabilities:
//!
//! - [`Node`], giving access to the literal text of the token the tree
//!   started from, used in diagnostics.
//! - [`SourceElement`](ember_base::source_file::SourceElement), locating the
//!   tree in the source text.
//! - [`Display`](std::fmt::Display), rendering the tree back into canonical
//!   source text with the grouping the parser decided made explicit.

pub mod expression;
pub mod program;
pub mod statement;

/// A capability shared by every syntax tree node.
pub trait Node {
    /// Gets the literal text of the token this node started from.
    fn token_literal(&self) -> &str;
}
