use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::Position;

/// A lexical error together with where it happened.
#[derive(Error, Debug, Clone)]
#[error("{internal_error} on line {line}")]
pub struct Error {
    internal_error: LexicalError,
    position: Position,
    line: usize,
}

impl Error {
    pub fn new(error_impl: LexicalError, position: Position, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
            line,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &LexicalError {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexicalError::IllegalCharacter { .. } => "IllegalCharacter",
            LexicalError::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexicalError::IllegalCharacter { character } => {
                ErrorTip::Suggestion(format!("Illegal character '{}'", character))
            }
            LexicalError::UnterminatedString { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("unterminated string literal {literal:?}")]
    UnterminatedString { literal: String },
}

/// Failures of the compile driver, as opposed to diagnostics inside the source.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{count} lexical error(s) in {file}")]
    Lexical { count: usize, file: String },
}
