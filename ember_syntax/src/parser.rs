//! Contains the definition of the [`Parser`].

use ember_base::diagnostic::Handler;
use ember_lexical::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

use crate::error::{Error, UnexpectedToken};

/// The binding strength of an operator, from weakest to strongest.
///
/// The parser climbs this ladder while parsing an expression: an operator to
/// the right of the cursor is consumed only while it binds more strongly than
/// the context the expression is being parsed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// The precedence of a context that accepts any expression.
    Lowest,

    /// `==` and `!=`
    Equals,

    /// `<` and `>`
    LessGreater,

    /// `+` and binary `-`
    Sum,

    /// `*` and `/`
    Product,

    /// Unary `!` and `-`
    Prefix,

    /// A call argument list following an expression.
    Call,
}

impl Precedence {
    /// Gets the precedence of the infix operator the given token kind
    /// represents, or [`Precedence::Lowest`] if it is not an infix operator.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// The parser of the Ember language.
///
/// The parser pulls tokens from the [`Lexer`] on demand and keeps a cursor of
/// two of them: the token under examination and one token of lookahead. It
/// never aborts on malformed source text; errors are reported to the given
/// [`Handler`] and parsing resumes at the next statement boundary.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    peek_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser reading from the given lexer.
    ///
    /// Pulls two tokens from the lexer so that both cursor positions are
    /// populated.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            current_token,
            peek_token,
        }
    }

    /// Gets the token currently under examination.
    #[must_use]
    pub const fn current_token(&self) -> &Token { &self.current_token }

    /// Gets the lookahead token.
    #[must_use]
    pub const fn peek_token(&self) -> &Token { &self.peek_token }

    /// Gets the kind of the token currently under examination.
    #[must_use]
    pub const fn current_kind(&self) -> TokenKind { self.current_token.kind }

    /// Gets the kind of the lookahead token.
    #[must_use]
    pub const fn peek_kind(&self) -> TokenKind { self.peek_token.kind }

    /// Advances the cursor by one token.
    pub(crate) fn bump(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances the cursor if the lookahead token is of the expected kind.
    ///
    /// Otherwise reports an [`UnexpectedToken`] error to the handler and
    /// leaves the cursor where it is.
    pub(crate) fn expect_peek(&mut self, expected: TokenKind, handler: &dyn Handler<Error>) -> bool {
        if self.peek_token.kind == expected {
            self.bump();
            true
        } else {
            handler.receive(Error::UnexpectedToken(UnexpectedToken {
                expected,
                found: self.peek_token.clone(),
            }));
            false
        }
    }

    /// Consumes the lookahead token if it is a semicolon.
    ///
    /// Statement parsers call this to make trailing semicolons optional.
    pub(crate) fn eat_semicolon(&mut self) {
        if self.peek_token.kind == TokenKind::Semicolon {
            self.bump();
        }
    }

    /// Gets the precedence of the token currently under examination.
    pub(crate) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current_token.kind)
    }

    /// Gets the precedence of the lookahead token.
    pub(crate) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    /// Skips tokens until the cursor sits on a statement boundary: a
    /// semicolon, a closing brace, or the end of the source.
    pub(crate) fn skip_to_statement_boundary(&mut self) {
        while !matches!(
            self.current_token.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.bump();
        }
    }
}
