//! Plain-text rendering of an analysis.
//!
//! The report has up to four sections, in this order and separated by a
//! blank line:
//!
//! ```text
//! Identifier table:
//! 1: x
//!
//! Constant table:
//! 1: 1
//! 2: 2
//!
//! Token stream:
//! (id, 1)
//! (:=, -)
//! (num, 1)
//! (+, -)
//! (num, 2)
//! (#, -)
//! ```
//!
//! A `Lexical errors:` section follows only when errors were recorded.

use std::fmt;

use crate::result::AnalysisResult;
use crate::token::Token;

/// How token lines are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportStyle {
    /// `(display-code, index-or--)`, e.g. `(id, 1)` or `(:=, -)`
    #[default]
    Pair,
    /// `(kind-code, index-or--, lexeme)`, e.g. `(10, 1, x)`
    Extended,
}

/// A renderable view of an [`AnalysisResult`].
///
/// # Example
///
/// ```
/// use lexc_lex::{analyze, Report, ReportStyle};
///
/// let result = analyze("x#");
/// let text = Report::new(&result, ReportStyle::Extended).to_string();
/// assert!(text.contains("(10, 1, x)"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Report<'r> {
    result: &'r AnalysisResult,
    style: ReportStyle,
}

impl<'r> Report<'r> {
    /// Creates a report over `result`.
    pub fn new(result: &'r AnalysisResult, style: ReportStyle) -> Self {
        Self { result, style }
    }

    /// Renders one token line without a trailing newline.
    pub fn token_line(token: &Token, style: ReportStyle) -> String {
        let index = token
            .table_index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        match style {
            ReportStyle::Pair => format!("({}, {})", token.kind.display_code(), index),
            ReportStyle::Extended => {
                format!("({}, {}, {})", token.kind.kind_code(), index, token.lexeme)
            },
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Identifier table:")?;
        for (index, lexeme) in self.result.identifiers().iter() {
            writeln!(f, "{}: {}", index, lexeme)?;
        }

        writeln!(f)?;
        writeln!(f, "Constant table:")?;
        for (index, value) in self.result.constants().iter() {
            writeln!(f, "{}: {}", index, value)?;
        }

        writeln!(f)?;
        writeln!(f, "Token stream:")?;
        for token in self.result.tokens() {
            writeln!(f, "{}", Self::token_line(token, self.style))?;
        }

        if self.result.has_errors() {
            writeln!(f)?;
            writeln!(f, "Lexical errors:")?;
            for error in self.result.errors() {
                writeln!(f, "{}", error)?;
            }
        }

        Ok(())
    }
}
