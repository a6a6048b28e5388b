//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme that produced it,
//! its source span, and, for identifiers and numbers, the 1-based index of
//! its entry in the identifier or constant table.
//!
//! Keywords, operators, and delimiters are closed enums. Each one maps to its
//! spelling (used as the display code in pair-form reports) and to a numeric
//! kind code (used in extended reports):
//!
//! | class | codes |
//! |---|---|
//! | keywords | 1-7 |
//! | identifier | 10 |
//! | number | 11 |
//! | operators | 20-35 |
//! | delimiters | 40-44 |

use std::fmt;

use lexc_util::{Span, TableIndex};

use crate::unicode::TERMINATOR;

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `while`
    While,
    /// `do`
    Do,
    /// `begin`
    Begin,
    /// `end`
    End,
}

impl Keyword {
    /// Every keyword, in kind-code order.
    pub const ALL: [Keyword; 7] = [
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::While,
        Keyword::Do,
        Keyword::Begin,
        Keyword::End,
    ];

    /// The source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Begin => "begin",
            Keyword::End => "end",
        }
    }

    /// Numeric kind code.
    pub fn code(self) -> u8 {
        match self {
            Keyword::If => 1,
            Keyword::Then => 2,
            Keyword::Else => 3,
            Keyword::While => 4,
            Keyword::Do => 5,
            Keyword::Begin => 6,
            Keyword::End => 7,
        }
    }
}

/// Operator spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<>`
    NotEq,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `:=`
    Assign,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
}

impl Operator {
    /// Every operator, in kind-code order.
    pub const ALL: [Operator; 16] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Eq,
        Operator::EqEq,
        Operator::Lt,
        Operator::Gt,
        Operator::LtEq,
        Operator::GtEq,
        Operator::NotEq,
        Operator::PlusPlus,
        Operator::MinusMinus,
        Operator::Assign,
        Operator::AndAnd,
        Operator::OrOr,
    ];

    /// The source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Eq => "=",
            Operator::EqEq => "==",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::NotEq => "<>",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::Assign => ":=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
        }
    }

    /// Numeric kind code.
    pub fn code(self) -> u8 {
        match self {
            Operator::Plus => 20,
            Operator::Minus => 21,
            Operator::Star => 22,
            Operator::Slash => 23,
            Operator::Eq => 24,
            Operator::EqEq => 25,
            Operator::Lt => 26,
            Operator::Gt => 27,
            Operator::LtEq => 28,
            Operator::GtEq => 29,
            Operator::NotEq => 30,
            Operator::PlusPlus => 31,
            Operator::MinusMinus => 32,
            Operator::Assign => 33,
            Operator::AndAnd => 34,
            Operator::OrOr => 35,
        }
    }

    /// Looks up a one- or two-character spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::token::Operator;
    ///
    /// assert_eq!(Operator::from_spelling(":="), Some(Operator::Assign));
    /// assert_eq!(Operator::from_spelling(":"), None);
    /// ```
    pub fn from_spelling(spelling: &str) -> Option<Operator> {
        let op = match spelling {
            "+" => Operator::Plus,
            "-" => Operator::Minus,
            "*" => Operator::Star,
            "/" => Operator::Slash,
            "=" => Operator::Eq,
            "==" => Operator::EqEq,
            "<" => Operator::Lt,
            ">" => Operator::Gt,
            "<=" => Operator::LtEq,
            ">=" => Operator::GtEq,
            "<>" => Operator::NotEq,
            "++" => Operator::PlusPlus,
            "--" => Operator::MinusMinus,
            ":=" => Operator::Assign,
            "&&" => Operator::AndAnd,
            "||" => Operator::OrOr,
            _ => return None,
        };
        Some(op)
    }
}

/// Single-character delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `#`, the end-of-program marker
    Terminator,
}

impl Delimiter {
    /// Every delimiter, in kind-code order.
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Semicolon,
        Delimiter::Comma,
        Delimiter::LParen,
        Delimiter::RParen,
        Delimiter::Terminator,
    ];

    /// The delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
            Delimiter::LParen => '(',
            Delimiter::RParen => ')',
            Delimiter::Terminator => TERMINATOR,
        }
    }

    /// The source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            Delimiter::Semicolon => ";",
            Delimiter::Comma => ",",
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
            Delimiter::Terminator => "#",
        }
    }

    /// Numeric kind code.
    pub fn code(self) -> u8 {
        match self {
            Delimiter::Semicolon => 40,
            Delimiter::Comma => 41,
            Delimiter::LParen => 42,
            Delimiter::RParen => 43,
            Delimiter::Terminator => 44,
        }
    }

    /// Looks up a delimiter character.
    pub fn from_char(c: char) -> Option<Delimiter> {
        match c {
            ';' => Some(Delimiter::Semicolon),
            ',' => Some(Delimiter::Comma),
            '(' => Some(Delimiter::LParen),
            ')' => Some(Delimiter::RParen),
            TERMINATOR => Some(Delimiter::Terminator),
            _ => None,
        }
    }
}

/// The class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word
    Keyword(Keyword),
    /// A name recorded in the identifier table
    Identifier,
    /// A numeric literal recorded in the constant table
    Number,
    /// An operator
    Operator(Operator),
    /// A delimiter
    Delimiter(Delimiter),
}

impl TokenKind {
    /// The code shown in pair-form reports: `id`, `num`, or the spelling.
    pub fn display_code(self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => kw.spelling(),
            TokenKind::Identifier => "id",
            TokenKind::Number => "num",
            TokenKind::Operator(op) => op.spelling(),
            TokenKind::Delimiter(delim) => delim.spelling(),
        }
    }

    /// The numeric code shown in extended reports.
    pub fn kind_code(self) -> u8 {
        match self {
            TokenKind::Keyword(kw) => kw.code(),
            TokenKind::Identifier => 10,
            TokenKind::Number => 11,
            TokenKind::Operator(op) => op.code(),
            TokenKind::Delimiter(delim) => delim.code(),
        }
    }

    /// Returns true for kinds that reference a symbol table.
    pub fn has_table_entry(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_code())
    }
}

/// Looks up a keyword by its exact, case-sensitive spelling.
///
/// # Example
///
/// ```
/// use lexc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("while"), Some(Keyword::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    match ident {
        "if" => Some(Keyword::If),
        "then" => Some(Keyword::Then),
        "else" => Some(Keyword::Else),
        "while" => Some(Keyword::While),
        "do" => Some(Keyword::Do),
        "begin" => Some(Keyword::Begin),
        "end" => Some(Keyword::End),
        _ => None,
    }
}

/// A classified unit of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token class
    pub kind: TokenKind,
    /// Index into the identifier table (identifiers) or the constant table
    /// (numbers); `None` for every other kind
    pub table_index: Option<TableIndex>,
    /// The exact source text of the token
    pub lexeme: String,
    /// Where the lexeme sits in the source
    pub span: Span,
}

impl Token {
    /// Creates a token with no table reference.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            table_index: None,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Creates an identifier or number token referencing a table entry.
    pub fn with_index(
        kind: TokenKind,
        index: TableIndex,
        lexeme: impl Into<String>,
        span: Span,
    ) -> Self {
        debug_assert!(kind.has_table_entry());
        Self {
            kind,
            table_index: Some(index),
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns true for the `#` delimiter.
    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::Delimiter(Delimiter::Terminator)
    }
}
