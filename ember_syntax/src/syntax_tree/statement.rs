//! Contains the syntax trees related to statements and their parsing logic.

use std::fmt::Display;

use ember_base::{
    diagnostic::Handler,
    source_file::{SourceElement, Span},
};
use ember_lexical::token::{KeywordKind, Token, TokenKind};
use enum_as_inner::EnumAsInner;
use getset::Getters;

use super::{
    expression::{Expression, Identifier},
    Node,
};
use crate::{
    error::{Error, UnexpectedToken},
    parser::{Parser, Precedence},
};

/// Is an enumeration containing all kinds of statements.
///
/// ``` txt
/// Statement:
///     LetStatement
///     | ReturnStatement
///     | ExpressionStatement
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let(statement) => statement.token_literal(),
            Self::Return(statement) => statement.token_literal(),
            Self::Expression(statement) => statement.token_literal(),
        }
    }
}

impl SourceElement for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Let(statement) => statement.span(),
            Self::Return(statement) => statement.span(),
            Self::Expression(statement) => statement.span(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(statement) => statement.fmt(f),
            Self::Return(statement) => statement.fmt(f),
            Self::Expression(statement) => statement.fmt(f),
        }
    }
}

/// Represents a statement binding the value of an expression to a name.
///
/// ``` txt
/// LetStatement:
///     'let' Identifier '=' Expression ';'?
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct LetStatement {
    /// The `let` keyword token.
    #[get = "pub"]
    pub(crate) let_token: Token,

    /// The name being bound.
    #[get = "pub"]
    pub(crate) name: Identifier,

    /// The expression whose value is bound to the name.
    ///
    /// Absent only when the expression itself failed to parse; the failure
    /// has already been reported by then.
    #[get = "pub"]
    pub(crate) value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str { self.let_token.literal() }
}

impl SourceElement for LetStatement {
    fn span(&self) -> Span {
        let end = self
            .value
            .as_ref()
            .map_or_else(|| self.name.span(), SourceElement::span);

        self.let_token
            .span
            .join(&end)
            .unwrap_or_else(|| self.let_token.span.clone())
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = ", self.name)?;

        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }

        write!(f, ";")
    }
}

/// Represents a statement returning the value of an expression from the
/// enclosing function.
///
/// ``` txt
/// ReturnStatement:
///     'return' Expression? ';'?
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct ReturnStatement {
    /// The `return` keyword token.
    #[get = "pub"]
    pub(crate) return_token: Token,

    /// The expression whose value is returned, if any.
    #[get = "pub"]
    pub(crate) value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str { self.return_token.literal() }
}

impl SourceElement for ReturnStatement {
    fn span(&self) -> Span {
        self.value.as_ref().map_or_else(
            || self.return_token.span.clone(),
            |value| {
                self.return_token
                    .span
                    .join(&value.span())
                    .unwrap_or_else(|| self.return_token.span.clone())
            },
        )
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return ")?;

        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }

        write!(f, ";")
    }
}

/// Represents an expression in statement position, evaluated for its value
/// at the top level or as the last statement of a block.
///
/// ``` txt
/// ExpressionStatement:
///     Expression ';'?
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct ExpressionStatement {
    /// The token the expression started from.
    #[get = "pub"]
    pub(crate) token: Token,

    /// The expression of the statement.
    ///
    /// Absent only when the expression failed to parse; the failure has
    /// already been reported by then.
    #[get = "pub"]
    pub(crate) expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str { self.token.literal() }
}

impl SourceElement for ExpressionStatement {
    fn span(&self) -> Span {
        self.expression
            .as_ref()
            .map_or_else(|| self.token.span.clone(), SourceElement::span)
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            write!(f, "{expression}")?;
        }

        Ok(())
    }
}

/// Represents a brace-delimited list of statements.
///
/// ``` txt
/// BlockStatement:
///     '{' Statement* '}'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct BlockStatement {
    /// The `{` token opening the block.
    #[get = "pub"]
    pub(crate) brace_token: Token,

    /// The statements of the block, in source order.
    #[get = "pub"]
    pub(crate) statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str { self.brace_token.literal() }
}

impl SourceElement for BlockStatement {
    fn span(&self) -> Span {
        self.statements.last().map_or_else(
            || self.brace_token.span.clone(),
            |statement| {
                self.brace_token
                    .span
                    .join(&statement.span())
                    .unwrap_or_else(|| self.brace_token.span.clone())
            },
        )
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        write!(f, "}}")
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Statement`] starting at the token under examination.
    ///
    /// Returns [`None`] when the statement is malformed beyond recovery; the
    /// caller is expected to skip to the next statement boundary. On success
    /// the cursor sits on the last token of the statement.
    pub fn parse_statement(&mut self, handler: &dyn Handler<Error>) -> Option<Statement> {
        match self.current_kind() {
            TokenKind::Keyword(KeywordKind::Let) => {
                self.parse_let_statement(handler).map(Statement::Let)
            }
            TokenKind::Keyword(KeywordKind::Return) => {
                Some(Statement::Return(self.parse_return_statement(handler)))
            }
            _ => Some(Statement::Expression(
                self.parse_expression_statement(handler),
            )),
        }
    }

    fn parse_let_statement(&mut self, handler: &dyn Handler<Error>) -> Option<LetStatement> {
        let let_token = self.current_token().clone();

        if !self.expect_peek(TokenKind::Identifier, handler) {
            return None;
        }
        let name = Identifier {
            token: self.current_token().clone(),
        };

        if !self.expect_peek(TokenKind::Assign, handler) {
            return None;
        }

        self.bump();
        let value = self.parse_expression(Precedence::Lowest, handler);

        self.eat_semicolon();

        Some(LetStatement {
            let_token,
            name,
            value,
        })
    }

    fn parse_return_statement(&mut self, handler: &dyn Handler<Error>) -> ReturnStatement {
        let return_token = self.current_token().clone();

        let value = if matches!(
            self.peek_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            None
        } else {
            self.bump();
            self.parse_expression(Precedence::Lowest, handler)
        };

        self.eat_semicolon();

        ReturnStatement {
            return_token,
            value,
        }
    }

    fn parse_expression_statement(&mut self, handler: &dyn Handler<Error>) -> ExpressionStatement {
        let token = self.current_token().clone();
        let expression = self.parse_expression(Precedence::Lowest, handler);

        self.eat_semicolon();

        ExpressionStatement { token, expression }
    }

    /// Parses a [`BlockStatement`] whose `{` token is under examination.
    ///
    /// Statements that fail to parse are skipped up to the next statement
    /// boundary, so a single malformed statement does not discard the rest of
    /// the block. On return the cursor sits on the `}` token, or on the end
    /// of the source if the block is unterminated.
    pub fn parse_block_statement(&mut self, handler: &dyn Handler<Error>) -> BlockStatement {
        let brace_token = self.current_token().clone();
        let mut statements = Vec::new();

        self.bump();

        while !matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof) {
            match self.parse_statement(handler) {
                Some(statement) => {
                    statements.push(statement);
                    self.bump();
                }
                None => {
                    self.skip_to_statement_boundary();

                    if self.current_kind() == TokenKind::Semicolon {
                        self.bump();
                    }
                }
            }
        }

        if self.current_kind() == TokenKind::Eof {
            handler.receive(Error::UnexpectedToken(UnexpectedToken {
                expected: TokenKind::RBrace,
                found: self.current_token().clone(),
            }));
        }

        BlockStatement {
            brace_token,
            statements,
        }
    }
}
