//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Type keywords and reserved words
//! - Identifiers
//! - Number and string literals
//! - Operators and punctuation
//! - Comments
//! - Silent discard of unrecognized characters

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_type_keywords() {
    let source = "int void char float double".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Type);
    }
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].value, "void");
    assert_eq!(tokens[2].value, "char");
    assert_eq!(tokens[3].value, "float");
    assert_eq!(tokens[4].value, "double");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_reserved_words() {
    let source = "if else while return".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::While);
    assert_eq!(tokens[3].kind, TokenKind::Return);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keyword_prefixed_identifiers() {
    // Longest match: these contain reserved words as prefixes but are
    // plain identifiers.
    let source = "integer iffy elsewhere returned whiler voidable".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number_with_decimal_point() {
    // There are no float literals: the dot matches no pattern and is
    // dropped, leaving two number tokens.
    let source = "3.14".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "3");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "14");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_has_no_escapes() {
    // Backslashes are ordinary characters inside a string literal.
    let source = r#""a\nb""#.to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r"a\nb");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "= ; , { } ( )".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[4].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[5].kind, TokenKind::OpenParen);
    assert_eq!(tokens[6].kind, TokenKind::CloseParen);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators_share_one_kind() {
    let source = "+ - * /".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    for (token, op) in tokens[..4].iter().zip(["+", "-", "*", "/"]) {
        assert_eq!(token.kind, TokenKind::Operator);
        assert_eq!(token.value, op);
    }
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_line_comment() {
    let source = "x = 1; // trailing comment\ny".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "y");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_comment() {
    let source = "a /* skipped\n over * lines */ b".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "b");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    // Without a closing */ the comment pattern cannot match, so the
    // opener falls through to the operator rules.
    let source = "a /* b".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "/");
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[2].value, "*");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "b");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    // The lone quote matches no pattern and is dropped; the rest of the
    // input is lexed normally.
    let source = "x = \"abc".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "abc");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_slash_is_still_an_operator() {
    let source = "a / b".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "/");
}

#[test]
fn test_tokenize_unknown_characters_discarded() {
    // Unrecognized characters never produce a token or an error.
    let source = "x @ # $ ~ ? y;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_non_ascii_discarded() {
    let source = "x £ y".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), Some("test.c".to_string()));

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_dense_source() {
    let source = "int main(){return 0;}".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Type,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_display() {
    let source = "42".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].to_string(), "Token {\nkind: Number,\nvalue: 42}");
}

#[test]
fn test_token_spans_track_offsets() {
    let source = "int x".to_string();
    let tokens = tokenize(source, Some("test.c".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(*tokens[1].span.start.1, "test.c");
}
