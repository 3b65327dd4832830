//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Recognition of reserved words, identifiers, strings and parentheses
//! - Line and offset tracking for error reporting
//! - Comments and whitespace handling
//! - Skip-and-resync recovery from illegal characters

pub mod lexer;
pub mod tokens;
