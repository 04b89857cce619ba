//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Decimal, hexadecimal and character literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.spl".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("array else if of proc ref type var while"),
        vec![
            TokenKind::Array,
            TokenKind::Else,
            TokenKind::If,
            TokenKind::Of,
            TokenKind::Proc,
            TokenKind::Ref,
            TokenKind::Type,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase arrays".to_string();
    let tokens = tokenize(source, Some("test.spl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    // keyword prefix does not make a keyword
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "arrays");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 0x1F 0XfF".to_string();
    let tokens = tokenize(source, Some("test.spl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::HexNumber);
    assert_eq!(tokens[2].value, "0x1F");
    assert_eq!(tokens[3].kind, TokenKind::HexNumber);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_characters() {
    let source = r"'a' '\n' ' '".to_string();
    let tokens = tokenize(source, Some("test.spl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Character);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Character);
    assert_eq!(tokens[1].value, "\\n");
    assert_eq!(tokens[2].value, " ");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds(":= : = # < <= > >= + - * /"),
        vec![
            TokenKind::Assignment,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("()[]{},;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "x := 1; // trailing comment\n// whole line\ny";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_positions_are_byte_offsets() {
    let source = "var  x".to_string();
    let tokens = tokenize(source, Some("test.spl".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(*tokens[1].span.start.1, "test.spl");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "x := 1 $ 2;".to_string();
    let error = tokenize(source, Some("test.spl".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None).unwrap();
    assert_eq!(*tokens[0].span.start.1, "shell");
}
