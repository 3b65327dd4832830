//! Compile driver.
//!
//! Reads a source file, runs it through a fresh lexer and hands back the
//! token stream together with every diagnostic raised along the way.
//! Printing is left to the caller.

pub mod driver;
