//! lexc-lex - Lexical Analyzer
//!
//! This crate turns a source text into a stream of classified tokens, a
//! deduplicated identifier table, a deduplicated numeric-constant table, and
//! an ordered list of lexical errors.
//!
//! # Example Usage
//!
//! ```
//! use lexc_lex::{analyze, TokenKind};
//!
//! let result = analyze("x := 1 + 2#");
//!
//! assert!(!result.has_errors());
//! assert_eq!(result.tokens()[0].kind, TokenKind::Identifier);
//! assert_eq!(result.identifiers().len(), 1);
//! assert_eq!(result.constants().len(), 2);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//! - [`error`] - Lexical error types
//! - [`result`] - The finished analysis
//! - [`report`] - Plain-text rendering
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `then`, `else`, `while`, `do`, `begin`, `end`
//!
//! ## Identifiers
//!
//! A letter followed by letters, ASCII digits, or `_`.
//!
//! ## Numbers
//!
//! ASCII digits with at most one decimal point: `42`, `3.25`, `1.`.
//! `07`, `.5`, `3.0.1`, and `12abc` are rejected.
//!
//! ## Operators
//!
//! `+ - * / = == < > <= >= <> ++ -- := && ||`
//!
//! ## Delimiters
//!
//! `;` `,` `(` `)` and the terminator `#`, which must be the last token.
//!
//! # Errors
//!
//! Lexical errors never stop the scan. Each one is recorded with its
//! position and the lexer moves on, so a single pass reports every problem.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod report;
pub mod result;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use tracing::debug;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use lexer::{parse_number, Lexer};
pub use report::{Report, ReportStyle};
pub use result::AnalysisResult;
pub use token::{keyword_from_ident, Delimiter, Keyword, Operator, Token, TokenKind};

/// Analyzes a complete source text.
///
/// This is a pure function of its input: calling it twice on the same text
/// yields equal results.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn analyze(source: &str) -> AnalysisResult {
    let result = Lexer::new(source).analyze();

    debug!(
        tokens = result.tokens().len(),
        identifiers = result.identifiers().len(),
        constants = result.constants().len(),
        errors = result.errors().len(),
        "lexical analysis finished"
    );

    result
}
