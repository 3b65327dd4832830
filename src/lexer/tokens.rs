use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("print", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Identifier,

    OpenParen,
    CloseParen,

    // Reserved
    Print,
}

impl TokenKind {
    /// The symbolic name used in token listings.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Identifier => "ID",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Print => "PRINT",
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LexToken({},'{}',{},{})",
            self.kind, self.value, self.line, self.span.start.0
        )
    }
}

impl Token {
    /// Byte offset of the first character of the token.
    pub fn offset(&self) -> usize {
        self.span.start.0 as usize
    }
}
