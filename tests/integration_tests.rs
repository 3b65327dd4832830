//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: loading source into a
//! lexer, pulling tokens until exhaustion and checking diagnostics.

use elang::{
    driver::driver::compile_source,
    errors::errors::LexicalError,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    render_error,
};

fn scan(source: &str) -> (Vec<Token>, Vec<elang::errors::errors::Error>) {
    tokenize(source.to_string(), Some("test.e".to_string()))
}

fn summary(tokens: &[Token]) -> Vec<(TokenKind, &str, usize)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str(), token.line))
        .collect()
}

#[test]
fn test_print_statement() {
    let (tokens, errors) = scan("print(\"hi\")");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Print, "print", 1),
            (TokenKind::OpenParen, "(", 1),
            (TokenKind::String, "\"hi\"", 1),
            (TokenKind::CloseParen, ")", 1),
        ]
    );
}

#[test]
fn test_two_identifiers() {
    let (tokens, errors) = scan("foo bar");

    assert!(errors.is_empty());
    assert_eq!(
        summary(&tokens),
        vec![(TokenKind::Identifier, "foo", 1), (TokenKind::Identifier, "bar", 1)]
    );
}

#[test]
fn test_comment_then_reserved_word() {
    let (tokens, errors) = scan("# comment\nprint");

    assert!(errors.is_empty());
    assert_eq!(summary(&tokens), vec![(TokenKind::Print, "print", 2)]);
}

#[test]
fn test_illegal_character_then_reserved_word() {
    let mut lexer = Lexer::new(Some("test.e".to_string()));
    lexer.load("@print".to_string());

    let token = lexer.next_token().unwrap();
    assert_eq!(lexer.diagnostics().len(), 1);
    assert_eq!(
        lexer.diagnostics()[0].get_kind(),
        &LexicalError::IllegalCharacter { character: '@' }
    );
    assert_eq!(lexer.diagnostics()[0].get_line(), 1);

    assert_eq!(token.kind, TokenKind::Print);
    assert_eq!(token.value, "print");
    assert_eq!(token.line, 1);
    assert!(lexer.next_token().is_none());
}

#[test]
fn test_empty_string_literal() {
    let (tokens, errors) = scan("\"\"");

    assert!(errors.is_empty());
    assert_eq!(summary(&tokens), vec![(TokenKind::String, "\"\"", 1)]);
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new(None);
    lexer.load(String::new());

    assert!(lexer.next_token().is_none());
    assert!(lexer.diagnostics().is_empty());
}

#[test]
fn test_recognized_characters_produce_no_errors() {
    let source = "print ( \"a \\\" b\" )\n\t_x1 y_2 # note\n\n(print)\n";
    let (tokens, errors) = scan(source);

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_line_numbers_follow_newlines() {
    let source = "a\n\nb # c\n  c\n\n\n(d)";
    let (tokens, _) = scan(source);

    let lines: Vec<usize> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 7, 7, 7]);
    assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_errors_do_not_stop_scanning() {
    let (tokens, errors) = scan("print(%x$)\n!\nfoo");

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[2].get_line(), 2);
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenKind::Print, "print", 1),
            (TokenKind::OpenParen, "(", 1),
            (TokenKind::Identifier, "x", 1),
            (TokenKind::CloseParen, ")", 1),
            (TokenKind::Identifier, "foo", 3),
        ]
    );
}

#[test]
fn test_driver_renders_diagnostics() {
    let compilation = compile_source("print $\n".to_string(), "main.e".to_string());

    assert_eq!(compilation.tokens.len(), 1);
    assert_eq!(compilation.diagnostics.len(), 1);
    assert_eq!(
        render_error(&compilation.diagnostics[0], &compilation.source),
        "Error: IllegalCharacter (Illegal character '$')\n-> main.e\n  |\n1 | print $\n  | ------^\n"
    );
}
