//! The finished analysis.

use lexc_util::{Constant, SymbolTable};

use crate::error::ScanError;
use crate::token::Token;

/// Everything one lexical analysis produced.
///
/// Built once by [`Lexer::analyze`](crate::Lexer::analyze) and never
/// modified afterwards. Every identifier and number token's `table_index`
/// names an entry in the matching table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    tokens: Vec<Token>,
    identifiers: SymbolTable<String>,
    constants: SymbolTable<Constant>,
    errors: Vec<ScanError>,
}

impl AnalysisResult {
    pub(crate) fn new(
        tokens: Vec<Token>,
        identifiers: SymbolTable<String>,
        constants: SymbolTable<Constant>,
        errors: Vec<ScanError>,
    ) -> Self {
        Self {
            tokens,
            identifiers,
            constants,
            errors,
        }
    }

    /// Tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct identifier spellings in first-seen order.
    pub fn identifiers(&self) -> &SymbolTable<String> {
        &self.identifiers
    }

    /// Distinct numeric values in first-seen order.
    pub fn constants(&self) -> &SymbolTable<Constant> {
        &self.constants
    }

    /// Lexical errors in order of occurrence.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Returns true if any lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if the last token is the `#` terminator.
    pub fn is_terminated(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_terminator)
    }
}
