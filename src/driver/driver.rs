use std::{fs, path::Path, time::Instant};

use tracing::info;

use crate::{
    errors::errors::{DriverError, Error},
    lexer::{lexer::Lexer, tokens::Token},
};

/// Result of scanning one source file.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub file: String,
    pub source: String,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn check(&self) -> Result<(), DriverError> {
        if self.has_errors() {
            return Err(DriverError::Lexical {
                count: self.diagnostics.len(),
                file: self.file.clone(),
            });
        }

        Ok(())
    }
}

pub fn compile(path: &Path) -> Result<Compilation, DriverError> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };

    Ok(compile_source(source, file_name))
}

pub fn compile_source(source: String, file: String) -> Compilation {
    let start = Instant::now();

    let mut lexer = Lexer::new(Some(file.clone()));
    lexer.load(source.clone());

    let tokens: Vec<Token> = lexer.by_ref().collect();
    let diagnostics = lexer.take_diagnostics();

    info!(
        file = %file,
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "Tokenized in {:?}",
        start.elapsed()
    );

    Compilation {
        file,
        source,
        tokens,
        diagnostics,
    }
}
