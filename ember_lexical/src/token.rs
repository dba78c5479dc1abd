//! Contains the definition of the [`Token`] produced by the lexer.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_more::From;
use ember_base::source_file::{SourceElement, Span};
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing keywords in the Ember language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|kind| (kind.as_str(), kind)).collect();
        }

        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as it appears in the
    /// source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }
}

/// Is an enumeration classifying every token the lexer can produce.
///
/// The kind alone drives every decision the parser makes; the textual content
/// of a token is recovered from its span when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
pub enum TokenKind {
    /// The end of the source text; produced indefinitely once reached.
    Eof,

    /// A character that does not start any recognized token.
    Illegal,

    /// A name such as `x`, `add` or `foo_bar`.
    Identifier,

    /// A base-ten integer literal.
    Int,

    /// `=`
    Assign,

    /// `+`
    Plus,

    /// `-`
    Minus,

    /// `!`
    Bang,

    /// `*`
    Asterisk,

    /// `/`
    Slash,

    /// `<`
    Lt,

    /// `>`
    Gt,

    /// `==`
    Eq,

    /// `!=`
    NotEq,

    /// `,`
    Comma,

    /// `;`
    Semicolon,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `{`
    LBrace,

    /// `}`
    RBrace,

    /// A reserved word of the language.
    #[from]
    Keyword(KeywordKind),
}

impl TokenKind {
    /// Gets the punctuation string of the token kind, if it is one.
    #[must_use]
    pub const fn punctuation(self) -> Option<&'static str> {
        match self {
            Self::Assign => Some("="),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Bang => Some("!"),
            Self::Asterisk => Some("*"),
            Self::Slash => Some("/"),
            Self::Lt => Some("<"),
            Self::Gt => Some(">"),
            Self::Eq => Some("=="),
            Self::NotEq => Some("!="),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eof => write!(f, "the end of the source"),
            Self::Illegal => write!(f, "an unrecognized character"),
            Self::Identifier => write!(f, "an identifier"),
            Self::Int => write!(f, "an integer literal"),
            Self::Keyword(keyword) => write!(f, "the keyword `{keyword}`"),
            punctuation => match punctuation.punctuation() {
                Some(string) => write!(f, "`{string}`"),
                None => unreachable!(),
            },
        }
    }
}

/// Represents a single meaningful unit of the source text.
///
/// A token pairs its [`TokenKind`] with the [`Span`] of source text it was
/// produced from; its literal text is a borrow of that span.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// The classification of the token.
    pub kind: TokenKind,

    /// The region of the source text the token covers.
    pub span: Span,
}

impl Token {
    /// Gets the literal text of the token as it appears in the source code.
    ///
    /// An [`TokenKind::Eof`] token has an empty literal.
    #[must_use]
    pub fn literal(&self) -> &str { self.span.str() }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}

#[cfg(test)]
mod tests;
