//! Delimiter scanning.

use crate::error::ScanErrorKind;
use crate::token::{Delimiter, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a single-character delimiter: `;` `,` `(` `)` or `#`.
    ///
    /// Any other character is consumed and reported as unrecognized.
    pub fn scan_delimiter(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.begin_token();
        let c = self.cursor.current_char();
        self.cursor.advance();

        match Delimiter::from_char(c) {
            Some(delimiter) => Some(Token::new(
                TokenKind::Delimiter(delimiter),
                delimiter.spelling(),
                self.token_span(),
            )),
            None => {
                self.report(ScanErrorKind::UnrecognizedCharacter(c.to_string()));
                None
            },
        }
    }
}
