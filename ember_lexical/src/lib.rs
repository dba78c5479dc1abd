//! This crate implements the lexical analysis phase of the Ember front-end.
//!
//! Lexical analysis turns the raw source text into a stream of [tokens](token::Token),
//! produced on demand by the [`Lexer`](lexer::Lexer).

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

pub mod lexer;
pub mod token;
