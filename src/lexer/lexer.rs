use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, LexicalError}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the cursor. Returns the token
/// to emit, or `None` when the match is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

lazy_static! {
    // Tried top to bottom at every position; the first match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\n+").unwrap(), handler: newline_handler},
        RegexPattern { regex: Regex::new(r"^#.*").unwrap(), handler: skip_handler},
        RegexPattern { regex: Regex::new(r"^[ \t]").unwrap(), handler: skip_handler},
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
        RegexPattern { regex: Regex::new(r#"^"(?s:\\.|[^"\\])*""#).unwrap(), handler: string_handler},
        RegexPattern { regex: Regex::new(r#"^"(?s:.*)"#).unwrap(), handler: unterminated_string_handler},
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler},
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    Loaded,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    file: Rc<String>,
    diagnostics: Vec<Error>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: String::new(),
            pos: 0,
            line: 1,
            file: file_name,
            diagnostics: vec![],
        }
    }

    /// Replaces the input and rewinds the cursor to the first line.
    pub fn load(&mut self, source: String) {
        debug!(file = %self.file, bytes = source.len(), "loading source");

        self.source = source;
        self.pos = 0;
        self.line = 1;
        self.diagnostics.clear();
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn state(&self) -> LexerState {
        if self.at_eof() {
            LexerState::Exhausted
        } else {
            LexerState::Loaded
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// Lexical errors do not end the scan: they are recorded in
    /// [`Lexer::diagnostics`] and scanning resumes after the bad input.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|matched| (pattern.handler, matched.as_str().to_string()))
            });

            match found {
                Some((handler, matched)) => {
                    if let Some(token) = handler(self, &matched) {
                        trace!(kind = %token.kind, value = %token.value, line = token.line, "token");
                        return Some(token);
                    }
                }
                None => self.illegal_character(),
            }
        }

        None
    }

    fn illegal_character(&mut self) {
        if let Some(character) = self.at() {
            self.report(LexicalError::IllegalCharacter { character });
            self.advance_n(character.len_utf8());
        }
    }

    fn report(&mut self, error_impl: LexicalError) {
        let error = Error::new(
            error_impl,
            Position(self.pos as u32, Rc::clone(&self.file)),
            self.line,
        );

        debug!(file = %self.file, line = self.line, offset = self.pos, "{}", error);
        self.diagnostics.push(error);
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn newline_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.line += matched.len();
    lexer.advance_n(matched.len());
    None
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(TokenKind::String, matched.to_string(), lexer.line, lexer.span_of(matched.len()));

    // Literals may span lines; keep the counter in step with the source.
    lexer.line += matched.matches('\n').count();
    lexer.advance_n(matched.len());
    Some(token)
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.report(LexicalError::UnterminatedString { literal: matched.to_string() });

    lexer.line += matched.matches('\n').count();
    lexer.advance_n(matched.len());
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);
    let token = MK_TOKEN!(kind, matched.to_string(), lexer.line, lexer.span_of(matched.len()));

    lexer.advance_n(matched.len());
    Some(token)
}

/// Scans `source` to the end, returning every token and every diagnostic.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(file);
    lex.load(source);

    let tokens: Vec<Token> = lex.by_ref().collect();
    (tokens, lex.take_diagnostics())
}
