use std::str::FromStr;

use proptest::{prop_assert, prop_assert_eq, proptest};
use strum::IntoEnumIterator;

use crate::token::{KeywordKind, TokenKind};

#[test]
fn keyword_string_representations_round_trip() {
    for keyword in KeywordKind::iter() {
        assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
        assert_eq!(keyword.to_string(), keyword.as_str());
    }
}

#[test]
fn non_keywords_fail_to_parse() {
    assert!(KeywordKind::from_str("").is_err());
    assert!(KeywordKind::from_str("letx").is_err());
    assert!(KeywordKind::from_str("Function").is_err());
    assert!(KeywordKind::from_str("fn").is_err());
}

#[test]
fn punctuation_strings() {
    assert_eq!(TokenKind::Assign.punctuation(), Some("="));
    assert_eq!(TokenKind::Eq.punctuation(), Some("=="));
    assert_eq!(TokenKind::NotEq.punctuation(), Some("!="));
    assert_eq!(TokenKind::Identifier.punctuation(), None);
    assert_eq!(TokenKind::Keyword(KeywordKind::Let).punctuation(), None);
}

proptest! {
    #[test]
    fn arbitrary_identifiers_are_not_keywords(
        identifier in "[a-zA-Z_][a-zA-Z0-9_]*"
    ) {
        let result = KeywordKind::from_str(&identifier);

        if KeywordKind::iter().any(|keyword| keyword.as_str() == identifier) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(super::KeywordParseError));
        }
    }
}
