//! Unit tests for the lexer module.

use crate::{errors::errors::ErrorImpl, variables::VariableTable, Position};

use super::{
    lexer::{lex, tokenize, tokenize_strict},
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn numbers(tokens: &[Token]) -> Vec<f64> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Number)
        .map(|token| token.value)
        .collect()
}

#[test]
fn test_tokenize_functions_and_groups() {
    let tokens = tokenize("ceil(floor(33.4 + 2.4) * 2.4)", &VariableTable::new());

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Ceil,
            TokenKind::LeftParen,
            TokenKind::Floor,
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Add,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Mul,
            TokenKind::Number,
            TokenKind::RightParen,
        ]
    );
    assert_eq!(numbers(&tokens), vec![33.4, 2.4, 2.4]);
}

#[test]
fn test_tokenize_variables() {
    let variables: VariableTable = vec![("a", 3.4), ("b", 5.6), ("x", -9.23), ("y", 2.0)]
        .into_iter()
        .collect();
    let tokens = tokenize("a + b * x / y", &variables);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Number,
            TokenKind::Add,
            TokenKind::Number,
            TokenKind::Mul,
            TokenKind::Number,
            TokenKind::Div,
            TokenKind::Number,
        ]
    );
    assert_eq!(numbers(&tokens), vec![3.4, 5.6, -9.23, 2.0]);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+-*/()", &VariableTable::new());

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::LeftParen,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn test_no_multi_character_operators() {
    let tokens = tokenize("2**3//4", &VariableTable::new());

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Number,
            TokenKind::Mul,
            TokenKind::Mul,
            TokenKind::Number,
            TokenKind::Div,
            TokenKind::Div,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7.", &VariableTable::new());

    assert_eq!(numbers(&tokens), vec![42.0, 3.14, 0.0, 100.5, 7.0]);
}

#[test]
fn test_literal_precision() {
    let tokens = tokenize("0.1 123456789.123456789", &VariableTable::new());

    assert_eq!(tokens[0].value.to_bits(), 0.1f64.to_bits());
    assert_eq!(tokens[1].value.to_bits(), 123456789.123456789f64.to_bits());
}

#[test]
fn test_malformed_number_splits() {
    let tokens = tokenize("1.2.3", &VariableTable::new());

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Number]);
    assert_eq!(numbers(&tokens), vec![1.2, 3.0]);
}

#[test]
fn test_leading_dot_is_skipped() {
    let tokens = tokenize(".5", &VariableTable::new());

    assert_eq!(numbers(&tokens), vec![5.0]);
}

#[test]
fn test_unknown_characters_are_skipped() {
    let tokens = tokenize(" \t2 % 3 # é\n", &VariableTable::new());

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Number]);
    assert_eq!(numbers(&tokens), vec![2.0, 3.0]);
}

#[test]
fn test_empty_source() {
    assert!(tokenize("", &VariableTable::new()).is_empty());
    assert!(tokenize("   ", &VariableTable::new()).is_empty());
}

#[test]
fn test_keywords_are_case_sensitive() {
    let variables: VariableTable = vec![("Floor", 1.5)].into_iter().collect();
    let tokens = tokenize("Floor floor CEIL", &variables);

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Floor]);
    assert_eq!(numbers(&tokens), vec![1.5]);
}

#[test]
fn test_keywords_take_priority_over_variables() {
    let variables: VariableTable = vec![("ceil", 9.0)].into_iter().collect();
    let tokens = tokenize("ceil", &variables);

    assert_eq!(kinds(&tokens), vec![TokenKind::Ceil]);
}

#[test]
fn test_first_variable_binding_wins() {
    let mut variables = VariableTable::new();
    variables.push("a", 1.0);
    variables.push("a", 2.0);

    let tokens = tokenize("a", &variables);
    assert_eq!(numbers(&tokens), vec![1.0]);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let variables: VariableTable = vec![("ab", 4.0)].into_iter().collect();
    let tokens = tokenize("ab2", &variables);

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Number]);
    assert_eq!(numbers(&tokens), vec![4.0, 2.0]);
}

#[test]
fn test_unresolved_identifier_is_dropped() {
    let variables: VariableTable = vec![("a", 1.0)].into_iter().collect();
    let tokens = tokenize("a + b", &variables);

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Add]);
}

#[test]
fn test_lexer_keeps_unresolved_identifiers() {
    let variables: VariableTable = vec![("a", 1.0)].into_iter().collect();
    let lexer = lex("b + a * cc", &variables);

    assert_eq!(
        kinds(lexer.tokens()),
        vec![TokenKind::Add, TokenKind::Number, TokenKind::Mul]
    );
    assert_eq!(
        lexer.unresolved(),
        &[
            ("b".to_string(), Position(0)),
            ("cc".to_string(), Position(8))
        ]
    );
}

#[test]
fn test_strict_reports_unresolved_identifier() {
    let variables: VariableTable = vec![("a", 1.0)].into_iter().collect();
    let error = tokenize_strict("a + bee * c", &variables).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnresolvedIdentifier {
            identifier: "bee".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_strict_accepts_resolved_source() {
    let variables: VariableTable = vec![("a", 1.0)].into_iter().collect();
    let tokens = tokenize_strict("floor(a) + 2", &variables).unwrap();

    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_token_spans() {
    let variables: VariableTable = vec![("rate", 0.5)].into_iter().collect();
    let tokens = tokenize("12.5 * rate", &variables);

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 4));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (5, 6));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (7, 11));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("floor(2.5)", &VariableTable::new());
    let rendered = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>();

    assert_eq!(rendered, vec!["floor", "(", "2.5", ")"]);
}
