//! Number literal scanning.
//!
//! Numbers are consumed in full before anything is checked, so a malformed
//! literal produces one error covering the whole run instead of a cascade of
//! per-character errors.

use lexc_util::Constant;

use crate::error::ScanErrorKind;
use crate::token::{Token, TokenKind};
use crate::unicode::is_number_suffix;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a number literal.
    ///
    /// Consumes the integer digits, then each `.` with the digits after it,
    /// then any tail of characters that cannot end a token (`12abc` is one
    /// run). The run is validated by [`parse_number`]; on success the value
    /// is interned into the constant table.
    ///
    /// # Returns
    ///
    /// A `num` token, or `None` after recording an error.
    pub fn scan_number(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.begin_token();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        while self.cursor.match_char('.') {
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        self.cursor.eat_while(is_number_suffix);

        if self.cursor.position() == self.token_start {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match parse_number(text) {
            Ok(value) => {
                let index = self.constants.intern(value);
                Some(Token::with_index(
                    TokenKind::Number,
                    index,
                    text,
                    self.token_span(),
                ))
            },
            Err(kind) => {
                self.report(kind);
                None
            },
        }
    }
}

/// Validates a number run and parses its value.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. more than one `.`
/// 2. no digits at all
/// 3. no `.`, more than one character, and a leading `0`
/// 4. a `.` with no digits before it
/// 5. any character other than a digit or `.`
///
/// A trailing point is accepted, so `1.` is the value `1`.
///
/// # Example
///
/// ```
/// use lexc_lex::parse_number;
/// use lexc_lex::ScanErrorKind;
///
/// assert_eq!(parse_number("2.50").map(|c| c.value()), Ok(2.5));
/// assert_eq!(
///     parse_number("07"),
///     Err(ScanErrorKind::LeadingZero("07".to_string()))
/// );
/// ```
pub fn parse_number(text: &str) -> Result<Constant, ScanErrorKind> {
    let points = text.matches('.').count();
    let integer_digits = text.bytes().take_while(u8::is_ascii_digit).count();

    if points > 1 {
        return Err(ScanErrorKind::MultipleDecimalPoints(text.to_string()));
    }

    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ScanErrorKind::MissingDigits(text.to_string()));
    }

    if points == 0 && text.len() > 1 && text.starts_with('0') {
        return Err(ScanErrorKind::LeadingZero(text.to_string()));
    }

    if points == 1 && integer_digits == 0 {
        return Err(ScanErrorKind::MissingIntegerPart(text.to_string()));
    }

    if !text.chars().all(|c| c == '.' || c.is_ascii_digit()) {
        return Err(ScanErrorKind::IllegalNumberCharacter(text.to_string()));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Constant::new(value)),
        _ => Err(ScanErrorKind::InvalidNumber(text.to_string())),
    }
}
