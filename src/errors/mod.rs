//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while scanning source text and
//! while driving a compile. It includes:
//!
//! - Lexical errors with source position and line information
//! - Driver errors for unreadable input
//! - Error names and tips used by the diagnostic renderer

pub mod errors;
