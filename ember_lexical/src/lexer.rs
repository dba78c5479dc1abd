//! Contains the [`Lexer`], which turns source text into [`Token`]s on demand.

use std::{str::FromStr, sync::Arc};

use ember_base::source_file::{self, ByteIndex, SourceFile, Span};

use crate::token::{KeywordKind, Token, TokenKind};

/// The lexer of the Ember language.
///
/// The lexer walks the source text character by character with a single
/// character of lookahead and produces one [`Token`] per call to
/// [`Lexer::next_token`]. It never fails; source text it does not recognize
/// comes out as [`TokenKind::Illegal`] tokens, one per offending character.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    iterator: source_file::Iterator<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer reading from the beginning of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iterator: source_file.iter(),
        }
    }

    /// Produces the next token of the source text.
    ///
    /// Whitespace between tokens is skipped and never surfaces as a token.
    /// Once the end of the source text is reached, every subsequent call
    /// returns a [`TokenKind::Eof`] token with a zero-width span.
    pub fn next_token(&mut self) -> Token {
        self.walk_iter(char::is_whitespace);

        let Some((start, character)) = self.iterator.next() else {
            return self.end_of_source();
        };

        if Self::is_identifier_start(character) {
            return self.identifier_or_keyword(start);
        }

        if character.is_ascii_digit() {
            return self.integer_literal(start);
        }

        let kind = match character {
            '=' => self.one_or_two('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.one_or_two('=', TokenKind::NotEq, TokenKind::Bang),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            _ => TokenKind::Illegal,
        };

        Token {
            kind,
            span: self.create_span(start),
        }
    }

    /// Checks if the given character can start an identifier.
    fn is_identifier_start(character: char) -> bool {
        character.is_ascii_alphabetic() || character == '_'
    }

    /// Checks if the given character can continue an identifier.
    fn is_identifier_continue(character: char) -> bool {
        character.is_ascii_alphanumeric() || character == '_'
    }

    /// Consumes characters from the iterator for as long as the predicate
    /// holds on the peeked character.
    fn walk_iter(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = self.iterator.peek() {
            if !predicate(character) {
                break;
            }

            self.iterator.next();
        }
    }

    /// Creates a span from the given start byte index to the current position
    /// of the iterator.
    fn create_span(&mut self, start: ByteIndex) -> Span {
        let end = self
            .iterator
            .peek()
            .map_or_else(|| self.iterator.source_file().content().len(), |(index, _)| index);

        Span::new(self.iterator.source_file().clone(), start, end)
            .expect("start and end came from char boundaries of the same source file")
    }

    fn end_of_source(&self) -> Token {
        let source_file = self.iterator.source_file().clone();
        let end = source_file.content().len();

        Token {
            kind: TokenKind::Eof,
            span: Span::new(source_file, end, end)
                .expect("the end of the source text is a char boundary"),
        }
    }

    /// Consumes the second character of a two-character operator if the peeked
    /// character matches, deciding between the two given kinds.
    fn one_or_two(&mut self, second: char, two: TokenKind, one: TokenKind) -> TokenKind {
        if self.iterator.peek().map(|(_, character)| character) == Some(second) {
            self.iterator.next();
            two
        } else {
            one
        }
    }

    fn identifier_or_keyword(&mut self, start: ByteIndex) -> Token {
        self.walk_iter(Self::is_identifier_continue);

        let span = self.create_span(start);
        let kind =
            KeywordKind::from_str(span.str()).map_or(TokenKind::Identifier, TokenKind::Keyword);

        Token { kind, span }
    }

    fn integer_literal(&mut self, start: ByteIndex) -> Token {
        self.walk_iter(|character| character.is_ascii_digit());

        Token {
            kind: TokenKind::Int,
            span: self.create_span(start),
        }
    }
}

#[cfg(test)]
mod tests;
