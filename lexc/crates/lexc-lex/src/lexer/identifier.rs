//! Identifier and keyword scanning.

use crate::error::ScanErrorKind;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start, is_unclassified};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// The run extends over identifier characters and over unclassified
    /// characters glued to them, so `ab$c` is one run. The run is then
    /// judged as a whole:
    ///
    /// - any character outside letters, digits, and `_` makes it an illegal
    ///   identifier;
    /// - an exact keyword spelling yields a keyword token;
    /// - a run not starting with a letter is rejected;
    /// - anything else is interned into the identifier table.
    ///
    /// # Returns
    ///
    /// The keyword or identifier token, or `None` after recording an error.
    pub fn scan_identifier_or_keyword(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.begin_token();
        self.cursor.advance();
        self.cursor
            .eat_while(|c| is_ident_continue(c) || is_unclassified(c));

        let text = self.cursor.slice_from(self.token_start);
        let span = self.token_span();

        if !text.chars().all(is_ident_continue) {
            self.report(ScanErrorKind::IllegalIdentifier(text.to_string()));
            return None;
        }

        if let Some(keyword) = keyword_from_ident(text) {
            return Some(Token::new(TokenKind::Keyword(keyword), text, span));
        }

        if !text.starts_with(is_ident_start) {
            self.report(ScanErrorKind::IdentifierStart(text.to_string()));
            return None;
        }

        let index = self.identifiers.intern(text.to_string());
        Some(Token::with_index(TokenKind::Identifier, index, text, span))
    }
}
