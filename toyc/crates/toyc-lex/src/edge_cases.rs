//! Edge case tests for toyc-lex

use crate::{tokenize, LexErrorKind, Lexer, Token, TokenKind};
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<Token> {
    Lexer::new(source).map(Result::unwrap).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t[0].kind, TokenKind::Identifier);
    assert_eq!(t[0].text, "x");
}

#[test]
fn test_edge_lone_underscore_is_identifier() {
    let t = lex_all("_");
    assert_eq!(t[0].kind, TokenKind::Identifier);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("{} = 1;", name));
    assert_eq!(t[0].text, name);
    assert_eq!(t[1].column, 10002);
}

#[test]
fn test_edge_no_whitespace_between_tokens() {
    let kinds: Vec<_> = lex_all("if(a<=b){putc(a);}").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::KeywordIf,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::OpLessEqual,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::KeywordPutc,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
        ]
    );
}

#[test]
fn test_edge_crlf_line_endings() {
    let t = lex_all("a\r\nb");
    assert_eq!((t[1].line, t[1].column), (2, 1));
}

#[test]
fn test_edge_comment_then_division() {
    let kinds: Vec<_> = lex_all("a /* c */ / b").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::OpDivide, TokenKind::Identifier]
    );
}

#[test]
fn test_edge_comment_markers_inside_string() {
    let t = lex_all("\"/* not a comment */\" // real comment");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].text, "/* not a comment */");
}

#[test]
fn test_edge_string_with_single_quote() {
    let t = lex_all("\"it's\"");
    assert_eq!(t[0].text, "it's");
}

#[test]
fn test_edge_char_literal_space() {
    assert_eq!(lex_all("' '")[0].text, "32");
}

#[test]
fn test_edge_char_literal_non_ascii() {
    assert_eq!(lex_all("'é'")[0].text, "233");
}

#[test]
fn test_edge_nul_character_is_unrecognized() {
    let err = tokenize("x\0").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('\0'));
}

#[test]
fn test_edge_end_after_trailing_newline() {
    let tokens = tokenize("x;\n").unwrap();
    let end = tokens.last().unwrap();
    assert_eq!((end.line, end.column), (2, 1));
}

#[test]
fn test_edge_end_without_trailing_newline() {
    let tokens = tokenize("x;").unwrap();
    let end = tokens.last().unwrap();
    assert_eq!((end.line, end.column), (1, 3));
}

#[test]
fn test_edge_unrecognized_characters() {
    for c in ['#', '$', '@', '[', ']', '.', ':', '^', '~', '?', '`', '\\'] {
        let err = tokenize(&c.to_string()).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter(c));
        assert_eq!((err.line(), err.column()), (Some(1), Some(1)));
    }
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_whitespace_only_is_single_end() {
    proptest!(|(input in "[ \t\r\n]{0,64}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(tokens[0].is_end());
    });
}

#[test]
fn test_property_end_is_idempotent() {
    proptest!(|(input in "[a-z0-9 +*;(){}\n]{0,64}", extra in 1usize..5)| {
        let mut lexer = Lexer::new(&input);
        let end = loop {
            let token = lexer.next_token().unwrap();
            if token.is_end() {
                break token;
            }
        };
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token().unwrap(), end.clone());
        }
    });
}

#[test]
fn test_property_arbitrary_identifiers() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].text, &input);
        let is_keyword = matches!(input.as_str(), "if" | "else" | "while" | "print" | "putc");
        prop_assert_eq!(tokens[0].kind.is_keyword(), is_keyword);
        if !is_keyword {
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        }
    });
}

#[test]
fn test_property_digit_runs_are_kept_raw() {
    proptest!(|(input in "[0-9]{1,40}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].text, &input);
    });
}

#[test]
fn test_property_string_bodies_are_verbatim() {
    proptest!(|(body in "[^\"]{0,64}")| {
        let source = format!("\"{}\"", body);
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].text, &body);
    });
}

#[test]
fn test_property_printable_char_literals() {
    proptest!(|(c in "[ -&(-\\[\\]-~]")| {
        let ch = c.chars().next().unwrap();
        let tokens = lex_all(&format!("'{}'", ch));
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(tokens[0].text.clone(), u32::from(ch).to_string());
    });
}

#[test]
fn test_property_line_comments_vanish() {
    proptest!(|(comment in "[^\n]{0,64}")| {
        let source = format!("1 //{}\n2", comment);
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
    });
}
