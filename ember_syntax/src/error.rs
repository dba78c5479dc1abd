//! Contains the definition of the errors the parser can report.

use std::fmt::Display;

use derive_more::From;
use ember_base::log::{Message, Severity, SourceCodeDisplay};
use ember_lexical::token::{Token, TokenKind};
use enum_as_inner::EnumAsInner;

/// The parser required a particular kind of token at the current position but
/// found a different one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedToken {
    /// The kind of token the grammar requires at this position.
    pub expected: TokenKind,

    /// The token that was actually found.
    pub found: Token,
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("expected {}, but found {}", self.expected, self.found.kind);

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(&self.found.span, Option::<i32>::None)
        )
    }
}

/// A token appeared in expression position, but no expression can start with
/// its kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedExpressionStart {
    /// The token that cannot start an expression.
    pub token: Token,
}

impl Display for UnexpectedExpressionStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("{} cannot start an expression", self.token.kind);

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(&self.token.span, Option::<i32>::None)
        )
    }
}

/// An integer literal whose value does not fit the integer type of the
/// language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MalformedIntegerLiteral {
    /// The integer literal token that failed to parse.
    pub token: Token,
}

impl Display for MalformedIntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "the integer literal is too large"),
            SourceCodeDisplay::new(
                &self.token.span,
                Some("integer literals must fit in a 64-bit signed integer")
            )
        )
    }
}

/// Is an enumeration containing all kinds of syntactic errors that the parser
/// can report.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedToken(UnexpectedToken),
    UnexpectedExpressionStart(UnexpectedExpressionStart),
    MalformedIntegerLiteral(MalformedIntegerLiteral),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken(error) => error.fmt(f),
            Self::UnexpectedExpressionStart(error) => error.fmt(f),
            Self::MalformedIntegerLiteral(error) => error.fmt(f),
        }
    }
}
