use std::{fmt::Display, str::FromStr};

use ember_base::source_file::SourceFile;
use ember_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    sample::select,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};
use strum::IntoEnumIterator;

use crate::{
    lexer::Lexer,
    token::{KeywordKind, Token, TokenKind},
};

fn tokenize(source: &str) -> Vec<Token> {
    let source_file = SourceFile::temp(source);
    let mut lexer = Lexer::new(&source_file);

    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    tokens
}

fn kinds_and_literals(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.literal().to_owned()))
        .collect()
}

#[test]
fn let_binding_token_sequence() {
    let tokens = kinds_and_literals(&tokenize("let x = 5;"));

    assert_eq!(
        tokens,
        [
            (TokenKind::Keyword(KeywordKind::Let), "let".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
            (TokenKind::Assign, "=".to_owned()),
            (TokenKind::Int, "5".to_owned()),
            (TokenKind::Semicolon, ";".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn two_character_operators() {
    let tokens = kinds_and_literals(&tokenize("== != = ! =!="));

    assert_eq!(
        tokens,
        [
            (TokenKind::Eq, "==".to_owned()),
            (TokenKind::NotEq, "!=".to_owned()),
            (TokenKind::Assign, "=".to_owned()),
            (TokenKind::Bang, "!".to_owned()),
            (TokenKind::Assign, "=".to_owned()),
            (TokenKind::NotEq, "!=".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn unrecognized_characters_are_illegal_tokens() {
    let tokens = kinds_and_literals(&tokenize("@ #"));

    assert_eq!(
        tokens,
        [
            (TokenKind::Illegal, "@".to_owned()),
            (TokenKind::Illegal, "#".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn end_of_source_repeats() {
    let source_file = SourceFile::temp("x");
    let mut lexer = Lexer::new(&source_file);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal(), "");
        assert_eq!(token.span.start(), token.span.end());
    }
}

#[test]
fn whitespace_only_source_is_empty() {
    let tokens = tokenize(" \t\r\n  ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn identifiers_and_keywords() {
    let tokens = kinds_and_literals(&tokenize("lets let function fn _x x1"));

    assert_eq!(
        tokens,
        [
            (TokenKind::Identifier, "lets".to_owned()),
            (TokenKind::Keyword(KeywordKind::Let), "let".to_owned()),
            (TokenKind::Keyword(KeywordKind::Function), "function".to_owned()),
            (TokenKind::Identifier, "fn".to_owned()),
            (TokenKind::Identifier, "_x".to_owned()),
            (TokenKind::Identifier, "x1".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

/// An input that produces a single token when written out as source text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum TokenInput {
    Identifier(String),
    Keyword(KeywordKind),
    Integer(u64),
    Punctuation(TokenKind),
}

impl Arbitrary for TokenInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let punctuations = [
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ];

        prop_oneof![
            "[a-zA-Z_][a-zA-Z0-9_]*"
                .prop_filter("identifiers must not collide with keywords", |string| {
                    KeywordKind::from_str(string).is_err()
                })
                .prop_map(Self::Identifier),
            select(KeywordKind::iter().collect::<Vec<_>>()).prop_map(Self::Keyword),
            proptest::num::u64::ANY.prop_map(Self::Integer),
            select(punctuations.to_vec()).prop_map(Self::Punctuation),
        ]
        .boxed()
    }
}

impl Display for TokenInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(string) => write!(f, "{string}"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Punctuation(kind) => match kind.punctuation() {
                Some(string) => write!(f, "{string}"),
                None => unreachable!(),
            },
        }
    }
}

impl Input<&Token> for &TokenInput {
    fn assert(self, output: &Token) -> TestCaseResult {
        match self {
            TokenInput::Identifier(string) => {
                prop_assert_eq!(output.kind, TokenKind::Identifier);
                prop_assert_eq!(output.literal(), string);
            }
            TokenInput::Keyword(keyword) => {
                prop_assert_eq!(output.kind, TokenKind::Keyword(*keyword));
                prop_assert_eq!(output.literal(), keyword.as_str());
            }
            TokenInput::Integer(value) => {
                prop_assert_eq!(output.kind, TokenKind::Int);
                prop_assert_eq!(output.literal(), value.to_string());
            }
            TokenInput::Punctuation(kind) => {
                prop_assert_eq!(output.kind, *kind);
                prop_assert_eq!(Some(output.literal()), kind.punctuation());
            }
        }

        Ok(())
    }
}

proptest! {
    #[test]
    fn tokenize_token_sequence(
        inputs in proptest::collection::vec(TokenInput::arbitrary(), 0..16)
    ) {
        let source = inputs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let source_file = SourceFile::temp(&source);
        let mut lexer = Lexer::new(&source_file);

        for input in &inputs {
            input.assert(&lexer.next_token())?;
        }

        prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn tokenization_terminates_and_is_idempotent(source in "\\PC*") {
        let first = kinds_and_literals(&tokenize(&source));
        let second = kinds_and_literals(&tokenize(&source));

        // producing a token always consumes at least one character, except
        // for the final end-of-source token
        prop_assert!(first.len() <= source.chars().count() + 1);
        prop_assert_eq!(first, second);
    }
}
