//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and keywords
//! - Integer and boolean literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Locations and the synthetic end token

use super::{lexer::tokenize, tokens::TokenKind};
use crate::Position;

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "bar");
    assert_eq!(tokens[2].text, "baz_123");
    assert_eq!(tokens[3].text, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].text, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::End);
}

#[test]
fn test_keywords_are_identifiers() {
    let source = "if then else while do var".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert!(token.is_reserved());
    }
    assert_eq!(tokens[6].kind, TokenKind::End);
}

#[test]
fn test_tokenize_literals() {
    let source = "42 0 true false 1243".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].text, "0");
    assert_eq!(tokens[2].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[2].text, "true");
    assert_eq!(tokens[3].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[3].text, "false");
    assert_eq!(tokens[4].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[5].kind, TokenKind::End);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = => and or not".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();

    assert_eq!(
        texts,
        vec!["+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "=", "=>", "and", "or", "not", ""]
    );
    for token in &tokens[..16] {
        assert_eq!(token.kind, TokenKind::Operator);
    }
}

#[test]
fn test_operators_without_spaces() {
    let tokens = tokenize("1<=x==y".to_string(), None);
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();

    assert_eq!(texts, vec!["1", "<=", "x", "==", "y", ""]);
}

#[test]
fn test_tokenize_punctuation() {
    let source = ";,(){}:".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens.len(), 8);
    for token in &tokens[..7] {
        assert_eq!(token.kind, TokenKind::Punctuation);
    }
    assert_eq!(tokens[0].text, ";");
    assert_eq!(tokens[6].text, ":");
}

#[test]
fn test_tokenize_comments() {
    let source = "// comment\na = 1\n# other comment\n".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[1].text, "=");
    assert_eq!(tokens[2].text, "1");
    assert_eq!(tokens[3].kind, TokenKind::End);
}

#[test]
fn test_locations_track_lines_and_columns() {
    let source = "// long comment\n    int 2\n\n# other comment\n        string c\n".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    let locations: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.location().line, token.location().column))
        .collect();

    assert_eq!(locations, vec![(2, 5), (2, 9), (5, 9), (5, 16), (5, 16)]);
    assert_eq!(tokens[0].location().file.as_str(), "test.lang");
}

#[test]
fn test_end_token_takes_previous_location() {
    let tokens = tokenize("x  +\n  y".to_string(), None);
    let end = tokens.last().unwrap();

    assert_eq!(end.kind, TokenKind::End);
    assert_eq!(end.text, "");
    assert_eq!(end.location(), tokens[tokens.len() - 2].location());
    assert_eq!(end.location().file.as_str(), "shell");
}

#[test]
fn test_empty_source_has_null_end() {
    let tokens = tokenize("  // nothing here".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::End);
    assert_eq!(tokens[0].location(), &Position::null());
}

#[test]
fn test_unrecognised_characters_are_skipped() {
    let tokens = tokenize("a @ b $ ä 3".to_string(), None);
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();

    assert_eq!(texts, vec!["a", "b", "3", ""]);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "var x: Int = 42;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens.len(), 8); // var, x, :, Int, =, 42, ;, end
    assert_eq!(tokens[0].text, "var");
    assert_eq!(tokens[2].kind, TokenKind::Punctuation);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::Operator);
    assert_eq!(tokens[5].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[7].kind, TokenKind::End);
}
