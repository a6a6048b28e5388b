//! Lexical error types.
//!
//! Scan problems are data, not failures: the lexer records a [`ScanError`]
//! and keeps going, so one pass reports every problem in the source.

use lexc_util::Span;
use thiserror::Error;

/// What went wrong, carrying the offending lexeme where there is one.
///
/// The `Display` impl is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    /// A character outside every class the lexer knows
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(String),

    /// An identifier run with characters that cannot appear in a name
    #[error("illegal identifier '{0}'")]
    IllegalIdentifier(String),

    /// An identifier run that does not begin with a letter
    #[error("identifier must start with a letter: '{0}'")]
    IdentifierStart(String),

    /// A number run with more than one `.`
    #[error("multiple decimal points in '{0}'")]
    MultipleDecimalPoints(String),

    /// A number run with no digits at all
    #[error("missing digits in '{0}'")]
    MissingDigits(String),

    /// An integer with a superfluous leading `0`
    #[error("leading zero in integer '{0}'")]
    LeadingZero(String),

    /// A number run starting at its decimal point
    #[error("missing integer part in '{0}'")]
    MissingIntegerPart(String),

    /// A number run with trailing characters that are neither digits nor `.`
    #[error("illegal character in number '{0}'")]
    IllegalNumberCharacter(String),

    /// A well-formed number run whose value does not fit a finite `f64`
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Operator characters that form no known operator
    #[error("undefined operator '{0}'")]
    UndefinedOperator(String),

    /// `:` not followed by `=`
    #[error("malformed assignment operator: expected '=' after ':'")]
    MalformedAssignment,

    /// The last token is not `#`
    #[error("unterminated program: missing terminator '#'")]
    Unterminated,
}

impl ScanErrorKind {
    /// The offending lexeme.
    pub fn lexeme(&self) -> &str {
        match self {
            ScanErrorKind::UnrecognizedCharacter(lexeme)
            | ScanErrorKind::IllegalIdentifier(lexeme)
            | ScanErrorKind::IdentifierStart(lexeme)
            | ScanErrorKind::MultipleDecimalPoints(lexeme)
            | ScanErrorKind::MissingDigits(lexeme)
            | ScanErrorKind::LeadingZero(lexeme)
            | ScanErrorKind::MissingIntegerPart(lexeme)
            | ScanErrorKind::IllegalNumberCharacter(lexeme)
            | ScanErrorKind::InvalidNumber(lexeme)
            | ScanErrorKind::UndefinedOperator(lexeme) => lexeme,
            ScanErrorKind::MalformedAssignment => ":",
            ScanErrorKind::Unterminated => "",
        }
    }
}

/// A lexical error and where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error at {span}: {kind}")]
pub struct ScanError {
    /// What went wrong
    pub kind: ScanErrorKind,
    /// The offending lexeme's location, or an empty span at the cursor when
    /// no lexeme could be formed
    pub span: Span,
}

impl ScanError {
    /// Creates an error.
    pub fn new(kind: ScanErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Byte offset of the start of the offending lexeme.
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// The offending lexeme.
    pub fn lexeme(&self) -> &str {
        self.kind.lexeme()
    }

    /// The human-readable message, without position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
