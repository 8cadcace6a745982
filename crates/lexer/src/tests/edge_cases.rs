// Lexer Edge Case Tests
//
// Whitespace handling, error characters, and span bookkeeping.

use crate::token::Token;
use crate::{lex, lex_spanned};

// ==================== WHITESPACE TESTS ====================

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        lex("  i32 \t ,\n f32 "),
        vec![
            Token::Identifier("i32".to_string()),
            Token::Comma,
            Token::Identifier("f32".to_string()),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert!(lex("").is_empty(), "Empty input must produce no tokens");
}

#[test]
fn test_whitespace_only_input() {
    assert!(lex("   \t\n").is_empty());
}

// ==================== ERROR CHARACTER TESTS ====================

#[test]
fn test_unknown_character_becomes_error_token() {
    let toks = lex_spanned("i32 @ f32");
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[1].0, Token::Error, "Unknown char must lex as Error");
}

#[test]
fn test_bare_percent_is_error() {
    // A value reference needs at least one character after %
    let toks = lex_spanned("%");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].0, Token::Error);
}

#[test]
fn test_lone_dash_is_error() {
    // "-" only means something as part of "->"
    let toks = lex_spanned("-");
    assert_eq!(toks[0].0, Token::Error);
}

// ==================== SPAN TESTS ====================

#[test]
fn test_spans_are_byte_offsets() {
    let toks = lex_spanned("add %a");
    assert_eq!(toks[0], (Token::Identifier("add".to_string()), 0..3));
    assert_eq!(toks[1], (Token::ValueRef("a".to_string()), 4..6));
}

#[test]
fn test_spans_skip_whitespace() {
    let toks = lex_spanned("  i32");
    assert_eq!(toks[0].1, 2..5);
}

// ==================== ANGLE BRACKET TESTS ====================

#[test]
fn test_double_close_is_two_tokens() {
    // tensor<4xcomplex<f32>> ends in two separate > tokens
    assert_eq!(lex(">>"), vec![Token::Gt, Token::Gt]);
}

#[test]
fn test_leading_zero_dimensions() {
    // Logos parses the digit run as a number, leading zeros and all
    assert_eq!(lex("007x"), vec![Token::Dim(7)]);
}
