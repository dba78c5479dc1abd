//! This crate implements the syntactic analysis phase of the Ember front-end.
//!
//! Syntactic analysis turns the token stream produced by the
//! [`Lexer`](ember_lexical::lexer::Lexer) into a
//! [`Program`](syntax_tree::program::Program) syntax tree via the
//! [`Parser`](parser::Parser).

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod parser;
pub mod syntax_tree;
