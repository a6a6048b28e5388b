//! Character classification.
//!
//! The dispatch loop picks a sub-scanner from the class of the current
//! character. Every character belongs to exactly one class; anything that
//! matches none of the predicates below is *unclassified*.

/// Characters that can only appear as the terminator or a separator.
pub const DELIMITERS: [char; 5] = [';', ',', '(', ')', '#'];

/// Characters that begin an operator spelling.
pub const OPERATOR_LEADS: [char; 10] = ['+', '-', '*', '/', '=', '<', '>', ':', '&', '|'];

/// The end-of-program marker.
pub const TERMINATOR: char = '#';

/// Checks if a character starts an identifier.
///
/// # Example
///
/// ```
/// use lexc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character may continue an identifier: a letter, an ASCII
/// digit, or `_`.
///
/// # Example
///
/// ```
/// use lexc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('٣')); // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_ascii_digit()
}

/// Checks if a character starts a number run.
#[inline]
pub fn is_number_start(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

/// Checks if a character is a delimiter.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Checks if a character begins an operator spelling.
#[inline]
pub fn is_operator_lead(c: char) -> bool {
    OPERATOR_LEADS.contains(&c)
}

/// Checks if a character belongs to no class the dispatch loop knows.
///
/// `_` continues identifiers but cannot start a token, so it counts as
/// unclassified here.
///
/// # Example
///
/// ```
/// use lexc_lex::unicode::is_unclassified;
///
/// assert!(is_unclassified('$'));
/// assert!(is_unclassified('_'));
/// assert!(!is_unclassified('.'));
/// assert!(!is_unclassified(' '));
/// ```
#[inline]
pub fn is_unclassified(c: char) -> bool {
    !(c.is_whitespace()
        || is_ident_start(c)
        || is_number_start(c)
        || is_delimiter(c)
        || is_operator_lead(c))
}

/// Checks if a character can extend a number run past its digits and
/// decimal points: anything that does not end a token.
#[inline]
pub fn is_number_suffix(c: char) -> bool {
    !(c.is_whitespace() || is_delimiter(c) || is_operator_lead(c))
}
