//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop, and the
//! bookkeeping shared by the sub-scanners.

use lexc_util::{Constant, Span, SymbolTable};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};
use crate::result::AnalysisResult;
use crate::token::Token;
use crate::unicode::{is_delimiter, is_ident_start, is_number_start, is_operator_lead};

/// Lexer for one source text.
///
/// A lexer owns all of its scan state: the cursor, the token stream, both
/// symbol tables, and the error list. Nothing is shared between lexers, so
/// independent analyses never observe each other.
///
/// The sub-scanners (`scan_identifier_or_keyword`, `scan_number`,
/// `scan_operator`, `scan_delimiter`) are public so they can be driven one at
/// a time. Each one consumes at least one character unless the cursor is
/// already at the end, returns the token it formed, and records at most one
/// error.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    tokens: Vec<Token>,
    pub(crate) identifiers: SymbolTable<String>,
    pub(crate) constants: SymbolTable<Constant>,
    errors: Vec<ScanError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            tokens: Vec::new(),
            identifiers: SymbolTable::new(),
            constants: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole source and returns the finished analysis.
    ///
    /// Whitespace is skipped, every other character is dispatched on its
    /// class, and once the input is exhausted the token stream is checked for
    /// a trailing `#`.
    pub fn analyze(mut self) -> AnalysisResult {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_at_end() {
                break;
            }

            if let Some(token) = self.next_token() {
                self.tokens.push(token);
            }
        }

        self.check_terminator();

        AnalysisResult::new(self.tokens, self.identifiers, self.constants, self.errors)
    }

    /// Dispatches on the class of the current character.
    fn next_token(&mut self) -> Option<Token> {
        match self.cursor.current_char() {
            c if is_ident_start(c) => self.scan_identifier_or_keyword(),
            c if is_number_start(c) => self.scan_number(),
            c if is_delimiter(c) => self.scan_delimiter(),
            c if is_operator_lead(c) => self.scan_operator(),
            c => {
                self.begin_token();
                self.cursor.advance();
                self.report(ScanErrorKind::UnrecognizedCharacter(c.to_string()));
                None
            },
        }
    }

    fn check_terminator(&mut self) {
        if self.tokens.last().is_some_and(Token::is_terminator) {
            return;
        }

        let span = Span::point(
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        );
        self.push_error(ScanError::new(ScanErrorKind::Unterminated, span));
    }

    /// Marks the cursor position as the start of the next lexeme.
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// The span from the start of the current lexeme to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Records an error covering the current lexeme.
    pub(crate) fn report(&mut self, kind: ScanErrorKind) {
        let span = self.token_span();
        self.push_error(ScanError::new(kind, span));
    }

    fn push_error(&mut self, error: ScanError) {
        trace!(
            line = error.span.line,
            column = error.span.column,
            "{}",
            error.kind
        );
        self.errors.push(error);
    }

    /// The identifier table as filled so far.
    pub fn identifiers(&self) -> &SymbolTable<String> {
        &self.identifiers
    }

    /// The constant table as filled so far.
    pub fn constants(&self) -> &SymbolTable<Constant> {
        &self.constants
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}
