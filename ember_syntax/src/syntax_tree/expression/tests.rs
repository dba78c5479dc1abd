use std::fmt::Display;

use ember_base::{diagnostic::Storage, source_file::SourceFile};
use ember_lexical::lexer::Lexer;
use ember_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};

use crate::{
    parser::{Parser, Precedence},
    syntax_tree::tests::{self, IdentifierInput},
};

/// An input producing a prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefixOperatorInput {
    Bang,
    Minus,
}

impl PrefixOperatorInput {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Minus => "-",
        }
    }
}

/// An input producing an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InfixOperatorInput {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperatorInput {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

/// An input producing an expression.
///
/// Composite inputs write themselves out fully parenthesized, so the tree the
/// parser produces must mirror the input exactly regardless of operator
/// precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpressionInput {
    Identifier(IdentifierInput),
    Integer(i64),
    Boolean(bool),
    Prefix(PrefixOperatorInput, Box<ExpressionInput>),
    Infix(Box<ExpressionInput>, InfixOperatorInput, Box<ExpressionInput>),
    Call(IdentifierInput, Vec<ExpressionInput>),
}

impl Arbitrary for ExpressionInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            IdentifierInput::arbitrary().prop_map(Self::Identifier),
            (0..=i64::MAX).prop_map(Self::Integer),
            proptest::bool::ANY.prop_map(Self::Boolean),
        ];

        leaf.prop_recursive(4, 16, 4, |inner| {
            prop_oneof![
                (
                    prop_oneof![
                        Just(PrefixOperatorInput::Bang),
                        Just(PrefixOperatorInput::Minus)
                    ],
                    inner.clone()
                )
                    .prop_map(|(operator, operand)| Self::Prefix(operator, Box::new(operand))),
                (
                    inner.clone(),
                    prop_oneof![
                        Just(InfixOperatorInput::Plus),
                        Just(InfixOperatorInput::Minus),
                        Just(InfixOperatorInput::Asterisk),
                        Just(InfixOperatorInput::Slash),
                        Just(InfixOperatorInput::Lt),
                        Just(InfixOperatorInput::Gt),
                        Just(InfixOperatorInput::Eq),
                        Just(InfixOperatorInput::NotEq),
                    ],
                    inner.clone()
                )
                    .prop_map(|(left, operator, right)| Self::Infix(
                        Box::new(left),
                        operator,
                        Box::new(right)
                    )),
                (
                    IdentifierInput::arbitrary(),
                    proptest::collection::vec(inner, 0..4)
                )
                    .prop_map(|(function, arguments)| Self::Call(function, arguments)),
            ]
        })
        .boxed()
    }
}

impl Display for ExpressionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix(operator, operand) => write!(f, "({}{operand})", operator.as_str()),
            Self::Infix(left, operator, right) => {
                write!(f, "({left} {} {right})", operator.as_str())
            }
            Self::Call(function, arguments) => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Input<&super::Expression> for &ExpressionInput {
    fn assert(self, output: &super::Expression) -> TestCaseResult {
        match (self, output) {
            (ExpressionInput::Identifier(input), super::Expression::Identifier(output)) => {
                input.assert(output)
            }
            (ExpressionInput::Integer(input), super::Expression::IntegerLiteral(output)) => {
                prop_assert_eq!(*input, output.value());
                Ok(())
            }
            (ExpressionInput::Boolean(input), super::Expression::BooleanLiteral(output)) => {
                prop_assert_eq!(*input, output.value());
                Ok(())
            }
            (ExpressionInput::Prefix(operator, operand), super::Expression::Prefix(output)) => {
                prop_assert_eq!(operator.as_str(), output.operator().literal());
                operand.assert(output.right())
            }
            (
                ExpressionInput::Infix(left, operator, right),
                super::Expression::Infix(output),
            ) => {
                left.assert(output.left())?;
                prop_assert_eq!(operator.as_str(), output.operator().literal());
                right.assert(output.right())
            }
            (ExpressionInput::Call(function, arguments), super::Expression::Call(output)) => {
                match output.function().as_ref() {
                    super::Expression::Identifier(identifier) => function.assert(identifier)?,
                    found => {
                        return Err(TestCaseError::fail(format!(
                            "expected an identifier callee, found {found:?}"
                        )))
                    }
                }

                arguments.assert(output.arguments())
            }
            (input, output) => Err(TestCaseError::fail(format!(
                "expected {input:?}, found {output:?}"
            ))),
        }
    }
}

proptest! {
    #[test]
    fn parse_arbitrary_expression(input in ExpressionInput::arbitrary()) {
        let expression = tests::parse(&input, |parser, handler| {
            parser.parse_expression(Precedence::Lowest, handler)
        })?;

        input.assert(&expression)?;
    }

    #[test]
    fn rendered_expressions_parse_back(input in ExpressionInput::arbitrary()) {
        let expression = tests::parse(&input, |parser, handler| {
            parser.parse_expression(Precedence::Lowest, handler)
        })?;

        let reparsed = tests::parse(expression.to_string(), |parser, handler| {
            parser.parse_expression(Precedence::Lowest, handler)
        })?;

        input.assert(&reparsed)?;
    }
}

fn parse_program_text(source: &str) -> (crate::syntax_tree::program::Program, Vec<crate::error::Error>) {
    let source_file = SourceFile::temp(source);
    let mut parser = Parser::new(Lexer::new(&source_file));
    let storage = Storage::new();

    let program = parser.parse_program(&storage);

    (program, storage.into_vec())
}

#[test]
fn operator_precedence_grouping() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true == true", "(true == true)"),
        ("false != true", "(false != true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];

    for (source, expected) in cases {
        let (program, errors) = parse_program_text(source);

        assert!(errors.is_empty(), "unexpected errors for {source:?}: {errors:#?}");
        assert_eq!(program.to_string(), expected, "for source {source:?}");
    }
}

#[test]
fn if_expression() {
    let (program, errors) = parse_program_text("if (x < y) { x }");

    assert!(errors.is_empty(), "{errors:#?}");
    assert_eq!(program.statements().len(), 1);

    let expression = program.statements()[0]
        .as_expression()
        .and_then(|statement| statement.expression().as_ref())
        .expect("expected an expression statement");
    let if_expression = expression.as_if().expect("expected an if expression");

    assert_eq!(if_expression.condition().to_string(), "(x < y)");
    assert_eq!(if_expression.consequence().statements().len(), 1);
    assert!(if_expression.alternative().is_none());
}

#[test]
fn if_else_expression() {
    let (program, errors) = parse_program_text("if (x < y) { x } else { y }");

    assert!(errors.is_empty(), "{errors:#?}");

    let expression = program.statements()[0]
        .as_expression()
        .and_then(|statement| statement.expression().as_ref())
        .expect("expected an expression statement");
    let if_expression = expression.as_if().expect("expected an if expression");

    let alternative = if_expression.alternative().as_ref().expect("expected an else branch");
    assert_eq!(alternative.statements().len(), 1);
    assert_eq!(program.to_string(), "if ((x < y)) {x} else {y}");
}

#[test]
fn function_literal() {
    let (program, errors) = parse_program_text("function(x, y) { x + y; }");

    assert!(errors.is_empty(), "{errors:#?}");

    let expression = program.statements()[0]
        .as_expression()
        .and_then(|statement| statement.expression().as_ref())
        .expect("expected an expression statement");
    let function = expression
        .as_function_literal()
        .expect("expected a function literal");

    let parameters: Vec<_> = function
        .parameters()
        .iter()
        .map(super::Identifier::value)
        .collect();
    assert_eq!(parameters, ["x", "y"]);
    assert_eq!(function.body().statements().len(), 1);
}

#[test]
fn function_parameter_lists() {
    let cases: [(&str, &[&str]); 3] = [
        ("function() {};", &[]),
        ("function(x) {};", &["x"]),
        ("function(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let (program, errors) = parse_program_text(source);

        assert!(errors.is_empty(), "unexpected errors for {source:?}: {errors:#?}");

        let expression = program.statements()[0]
            .as_expression()
            .and_then(|statement| statement.expression().as_ref())
            .expect("expected an expression statement");
        let function = expression
            .as_function_literal()
            .expect("expected a function literal");

        let parameters: Vec<_> = function
            .parameters()
            .iter()
            .map(super::Identifier::value)
            .collect();
        assert_eq!(parameters, expected, "for source {source:?}");
    }
}

#[test]
fn call_expression() {
    let (program, errors) = parse_program_text("add(1, 2 * 3, 4 + 5);");

    assert!(errors.is_empty(), "{errors:#?}");

    let expression = program.statements()[0]
        .as_expression()
        .and_then(|statement| statement.expression().as_ref())
        .expect("expected an expression statement");
    let call = expression.as_call().expect("expected a call expression");

    assert_eq!(call.function().to_string(), "add");
    assert_eq!(call.arguments().len(), 3);
    assert_eq!(call.arguments()[1].to_string(), "(2 * 3)");
}

#[test]
fn integer_literal_overflow_is_reported() {
    let (program, errors) = parse_program_text("92233720368547758080;");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_malformed_integer_literal());
    assert_eq!(program.statements().len(), 1);
}

#[test]
fn unexpected_expression_start_is_reported() {
    let (program, errors) = parse_program_text("@;");

    assert_eq!(errors.len(), 1);

    let error = errors[0]
        .as_unexpected_expression_start()
        .expect("expected an unexpected expression start error");
    assert_eq!(error.token.kind, ember_lexical::token::TokenKind::Illegal);
    assert_eq!(program.statements().len(), 1);
}

proptest! {
    #[test]
    fn expression_termination(source in "\\PC{0,64}") {
        let (_, _) = parse_program_text(&source);
    }
}
