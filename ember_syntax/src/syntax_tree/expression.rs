//! Contains the syntax trees related to expressions and their parsing logic.

use std::fmt::Display;

use ember_base::{
    diagnostic::Handler,
    source_file::{SourceElement, Span},
};
use ember_lexical::token::{KeywordKind, Token, TokenKind};
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};

use super::{statement::BlockStatement, Node};
use crate::{
    error::{Error, MalformedIntegerLiteral, UnexpectedExpressionStart},
    parser::{Parser, Precedence},
};

/// Is an enumeration containing all kinds of expressions.
///
/// ``` txt
/// Expression:
///     Identifier
///     | IntegerLiteral
///     | BooleanLiteral
///     | Prefix
///     | Infix
///     | If
///     | FunctionLiteral
///     | Call
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    FunctionLiteral(FunctionLiteral),
    Call(Call),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(expression) => expression.token_literal(),
            Self::IntegerLiteral(expression) => expression.token_literal(),
            Self::BooleanLiteral(expression) => expression.token_literal(),
            Self::Prefix(expression) => expression.token_literal(),
            Self::Infix(expression) => expression.token_literal(),
            Self::If(expression) => expression.token_literal(),
            Self::FunctionLiteral(expression) => expression.token_literal(),
            Self::Call(expression) => expression.token_literal(),
        }
    }
}

impl SourceElement for Expression {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(expression) => expression.span(),
            Self::IntegerLiteral(expression) => expression.span(),
            Self::BooleanLiteral(expression) => expression.span(),
            Self::Prefix(expression) => expression.span(),
            Self::Infix(expression) => expression.span(),
            Self::If(expression) => expression.span(),
            Self::FunctionLiteral(expression) => expression.span(),
            Self::Call(expression) => expression.span(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(expression) => expression.fmt(f),
            Self::IntegerLiteral(expression) => expression.fmt(f),
            Self::BooleanLiteral(expression) => expression.fmt(f),
            Self::Prefix(expression) => expression.fmt(f),
            Self::Infix(expression) => expression.fmt(f),
            Self::If(expression) => expression.fmt(f),
            Self::FunctionLiteral(expression) => expression.fmt(f),
            Self::Call(expression) => expression.fmt(f),
        }
    }
}

/// Represents a name used as an expression.
///
/// ``` txt
/// Identifier:
///     identifier
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Identifier {
    /// The identifier token.
    #[get = "pub"]
    pub(crate) token: Token,
}

impl Identifier {
    /// Gets the name this identifier refers to.
    #[must_use]
    pub fn value(&self) -> &str { self.token.literal() }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str { self.token.literal() }
}

impl SourceElement for Identifier {
    fn span(&self) -> Span { self.token.span.clone() }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Represents a base-ten integer literal expression.
///
/// ``` txt
/// IntegerLiteral:
///     int
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct IntegerLiteral {
    /// The integer literal token.
    #[get = "pub"]
    pub(crate) token: Token,

    /// The numeric value the literal denotes.
    #[get_copy = "pub"]
    pub(crate) value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str { self.token.literal() }
}

impl SourceElement for IntegerLiteral {
    fn span(&self) -> Span { self.token.span.clone() }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a `true` or `false` literal expression.
///
/// ``` txt
/// BooleanLiteral:
///     'true'
///     | 'false'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct BooleanLiteral {
    /// The keyword token of the literal.
    #[get = "pub"]
    pub(crate) token: Token,

    /// The value the literal denotes.
    #[get_copy = "pub"]
    pub(crate) value: bool,
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str { self.token.literal() }
}

impl SourceElement for BooleanLiteral {
    fn span(&self) -> Span { self.token.span.clone() }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a prefix operator applied to an expression.
///
/// ``` txt
/// Prefix:
///     ('!' | '-') Expression
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Prefix {
    /// The operator token.
    #[get = "pub"]
    pub(crate) operator: Token,

    /// The operand the operator applies to.
    #[get = "pub"]
    pub(crate) right: Box<Expression>,
}

impl Node for Prefix {
    fn token_literal(&self) -> &str { self.operator.literal() }
}

impl SourceElement for Prefix {
    fn span(&self) -> Span {
        self.operator
            .span
            .join(&self.right.span())
            .unwrap_or_else(|| self.operator.span.clone())
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.literal(), self.right)
    }
}

/// Represents a binary operator applied to two expressions.
///
/// ``` txt
/// Infix:
///     Expression ('+' | '-' | '*' | '/' | '<' | '>' | '==' | '!=') Expression
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Infix {
    /// The left-hand operand.
    #[get = "pub"]
    pub(crate) left: Box<Expression>,

    /// The operator token.
    #[get = "pub"]
    pub(crate) operator: Token,

    /// The right-hand operand.
    #[get = "pub"]
    pub(crate) right: Box<Expression>,
}

impl Node for Infix {
    fn token_literal(&self) -> &str { self.operator.literal() }
}

impl SourceElement for Infix {
    fn span(&self) -> Span {
        self.left
            .span()
            .join(&self.right.span())
            .unwrap_or_else(|| self.operator.span.clone())
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.literal(), self.right)
    }
}

/// Represents a conditional expression with an optional alternative.
///
/// ``` txt
/// If:
///     'if' '(' Expression ')' BlockStatement ('else' BlockStatement)?
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct If {
    /// The `if` keyword token.
    #[get = "pub"]
    pub(crate) if_token: Token,

    /// The condition deciding which branch is taken.
    #[get = "pub"]
    pub(crate) condition: Box<Expression>,

    /// The branch taken when the condition holds.
    #[get = "pub"]
    pub(crate) consequence: BlockStatement,

    /// The branch taken otherwise, if any.
    #[get = "pub"]
    pub(crate) alternative: Option<BlockStatement>,
}

impl Node for If {
    fn token_literal(&self) -> &str { self.if_token.literal() }
}

impl SourceElement for If {
    fn span(&self) -> Span {
        let end = self
            .alternative
            .as_ref()
            .map_or_else(|| self.consequence.span(), SourceElement::span);

        self.if_token
            .span
            .join(&end)
            .unwrap_or_else(|| self.if_token.span.clone())
    }
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }

        Ok(())
    }
}

/// Represents an anonymous function literal.
///
/// ``` txt
/// FunctionLiteral:
///     'function' '(' (Identifier (',' Identifier)*)? ')' BlockStatement
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct FunctionLiteral {
    /// The `function` keyword token.
    #[get = "pub"]
    pub(crate) function_token: Token,

    /// The parameter names of the function, in declaration order.
    #[get = "pub"]
    pub(crate) parameters: Vec<Identifier>,

    /// The body of the function.
    #[get = "pub"]
    pub(crate) body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str { self.function_token.literal() }
}

impl SourceElement for FunctionLiteral {
    fn span(&self) -> Span {
        self.function_token
            .span
            .join(&self.body.span())
            .unwrap_or_else(|| self.function_token.span.clone())
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "function(")?;

        for (index, parameter) in self.parameters.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }

        write!(f, ") {}", self.body)
    }
}

/// Represents a call of an expression with a list of arguments.
///
/// ``` txt
/// Call:
///     Expression '(' (Expression (',' Expression)*)? ')'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct Call {
    /// The expression being called.
    #[get = "pub"]
    pub(crate) function: Box<Expression>,

    /// The `(` token opening the argument list.
    #[get = "pub"]
    pub(crate) lparen: Token,

    /// The arguments of the call, in source order.
    #[get = "pub"]
    pub(crate) arguments: Vec<Expression>,

    /// The `)` token closing the argument list.
    #[get = "pub"]
    pub(crate) rparen: Token,
}

impl Node for Call {
    fn token_literal(&self) -> &str { self.lparen.literal() }
}

impl SourceElement for Call {
    fn span(&self) -> Span {
        self.function
            .span()
            .join(&self.rparen.span)
            .unwrap_or_else(|| self.lparen.span.clone())
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.function)?;

        for (index, argument) in self.arguments.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }

        write!(f, ")")
    }
}

/// A function parsing an expression that starts at the token under
/// examination.
type PrefixParser<'a> = fn(&mut Parser<'a>, &dyn Handler<Error>) -> Option<Expression>;

/// A function parsing the continuation of an expression; the token under
/// examination is the operator and the already parsed operand is passed in.
type InfixParser<'a> = fn(&mut Parser<'a>, Expression, &dyn Handler<Error>) -> Option<Expression>;

impl<'a> Parser<'a> {
    /// Gets the parsing function for an expression starting with the given
    /// token kind, or [`None`] if no expression can start with it.
    fn prefix_parser(kind: TokenKind) -> Option<PrefixParser<'a>> {
        match kind {
            TokenKind::Identifier => Some(Self::parse_identifier_expression),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Keyword(KeywordKind::True | KeywordKind::False) => {
                Some(Self::parse_boolean_literal)
            }
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::Keyword(KeywordKind::If) => Some(Self::parse_if_expression),
            TokenKind::Keyword(KeywordKind::Function) => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    /// Gets the parsing function continuing an expression with the given
    /// token kind, or [`None`] if the kind is not an infix operator.
    fn infix_parser(kind: TokenKind) -> Option<InfixParser<'a>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Some(Self::parse_infix_expression),
            TokenKind::LParen => Some(Self::parse_call_expression),
            _ => None,
        }
    }

    /// Parses an [`Expression`] starting at the token under examination.
    ///
    /// The given precedence is the binding strength of the context the
    /// expression appears in; infix operators to the right are consumed only
    /// while they bind more strongly than it. On success the cursor sits on
    /// the last token of the expression.
    pub fn parse_expression(
        &mut self,
        precedence: Precedence,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parser(self.current_kind()) else {
            handler.receive(Error::UnexpectedExpressionStart(UnexpectedExpressionStart {
                token: self.current_token().clone(),
            }));
            return None;
        };

        let mut left = prefix(self, handler)?;

        while self.peek_kind() != TokenKind::Semicolon && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parser(self.peek_kind()) else {
                return Some(left);
            };

            self.bump();
            left = infix(self, left, handler)?;
        }

        Some(left)
    }

    fn parse_identifier_expression(&mut self, _: &dyn Handler<Error>) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.current_token().clone(),
        }))
    }

    fn parse_integer_literal(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();

        // the lexer guarantees the literal is a non-empty digit run, so the
        // only possible failure is overflow
        match token.literal().parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                handler.receive(Error::MalformedIntegerLiteral(MalformedIntegerLiteral {
                    token,
                }));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self, _: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();
        let value = token.kind == TokenKind::Keyword(KeywordKind::True);

        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    fn parse_prefix_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let operator = self.current_token().clone();

        self.bump();
        let right = Box::new(self.parse_expression(Precedence::Prefix, handler)?);

        Some(Expression::Prefix(Prefix { operator, right }))
    }

    fn parse_infix_expression(
        &mut self,
        left: Expression,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let operator = self.current_token().clone();
        let precedence = self.current_precedence();

        self.bump();
        let right = Box::new(self.parse_expression(precedence, handler)?);

        Some(Expression::Infix(Infix {
            left: Box::new(left),
            operator,
            right,
        }))
    }

    fn parse_grouped_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        self.bump();
        let expression = self.parse_expression(Precedence::Lowest, handler)?;

        if !self.expect_peek(TokenKind::RParen, handler) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let if_token = self.current_token().clone();

        if !self.expect_peek(TokenKind::LParen, handler) {
            return None;
        }

        self.bump();
        let condition = Box::new(self.parse_expression(Precedence::Lowest, handler)?);

        if !self.expect_peek(TokenKind::RParen, handler) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace, handler) {
            return None;
        }

        let consequence = self.parse_block_statement(handler);

        let alternative = if self.peek_kind() == TokenKind::Keyword(KeywordKind::Else) {
            self.bump();

            if !self.expect_peek(TokenKind::LBrace, handler) {
                return None;
            }

            Some(self.parse_block_statement(handler))
        } else {
            None
        };

        Some(Expression::If(If {
            if_token,
            condition,
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let function_token = self.current_token().clone();

        if !self.expect_peek(TokenKind::LParen, handler) {
            return None;
        }

        let parameters = self.parse_function_parameters(handler)?;

        if !self.expect_peek(TokenKind::LBrace, handler) {
            return None;
        }

        let body = self.parse_block_statement(handler);

        Some(Expression::FunctionLiteral(FunctionLiteral {
            function_token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(
        &mut self,
        handler: &dyn Handler<Error>,
    ) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_kind() == TokenKind::RParen {
            self.bump();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Identifier, handler) {
            return None;
        }
        parameters.push(Identifier {
            token: self.current_token().clone(),
        });

        while self.peek_kind() == TokenKind::Comma {
            self.bump();

            if !self.expect_peek(TokenKind::Identifier, handler) {
                return None;
            }
            parameters.push(Identifier {
                token: self.current_token().clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen, handler) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(
        &mut self,
        function: Expression,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let lparen = self.current_token().clone();
        let arguments = self.parse_call_arguments(handler)?;
        let rparen = self.current_token().clone();

        Some(Expression::Call(Call {
            function: Box::new(function),
            lparen,
            arguments,
            rparen,
        }))
    }

    fn parse_call_arguments(&mut self, handler: &dyn Handler<Error>) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_kind() == TokenKind::RParen {
            self.bump();
            return Some(arguments);
        }

        self.bump();
        arguments.push(self.parse_expression(Precedence::Lowest, handler)?);

        while self.peek_kind() == TokenKind::Comma {
            self.bump();
            self.bump();
            arguments.push(self.parse_expression(Precedence::Lowest, handler)?);
        }

        if !self.expect_peek(TokenKind::RParen, handler) {
            return None;
        }

        Some(arguments)
    }
}

#[cfg(test)]
pub(crate) mod tests;
