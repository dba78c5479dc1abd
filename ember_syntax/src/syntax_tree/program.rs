//! Contains the [`Program`] syntax tree, the root of every parse.

use std::fmt::Display;

use ember_base::diagnostic::Handler;
use ember_lexical::token::TokenKind;
use getset::Getters;

use super::{statement::Statement, Node};
use crate::{error::Error, parser::Parser};

/// Represents a whole source text, a sequence of statements.
///
/// ``` txt
/// Program:
///     Statement*
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, Default)]
pub struct Program {
    /// The statements of the program, in source order.
    #[get = "pub"]
    pub(crate) statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Node::token_literal)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl<'a> Parser<'a> {
    /// Parses a whole [`Program`] until the end of the source text.
    ///
    /// Parsing always produces a program; statements that fail to parse are
    /// skipped up to the next statement boundary and their errors are
    /// reported to the handler, in source order.
    pub fn parse_program(&mut self, handler: &dyn Handler<Error>) -> Program {
        let mut statements = Vec::new();

        while self.current_kind() != TokenKind::Eof {
            match self.parse_statement(handler) {
                Some(statement) => statements.push(statement),
                None => self.skip_to_statement_boundary(),
            }

            self.bump();
        }

        Program { statements }
    }
}
