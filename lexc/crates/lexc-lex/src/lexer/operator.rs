//! Operator scanning.

use crate::error::ScanErrorKind;
use crate::token::{Operator, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an operator.
    ///
    /// Greedy longest match over one- and two-character spellings: the
    /// second character is taken only when the pair is a known operator.
    /// Characters are never given back, so a lone `:`, `&` or `|` is
    /// consumed and reported.
    ///
    /// Handles: `+ - * / = == < > <= >= <> ++ -- := && ||`
    pub fn scan_operator(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.begin_token();
        let first = self.cursor.current_char();
        self.cursor.advance();

        if !self.cursor.is_at_end() {
            let end = self.cursor.position() + self.cursor.current_char().len_utf8();
            let pair = &self.cursor.source()[self.token_start..end];
            if let Some(op) = Operator::from_spelling(pair) {
                self.cursor.advance();
                return Some(self.operator_token(op));
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        match Operator::from_spelling(text) {
            Some(op) => Some(self.operator_token(op)),
            None if first == ':' => {
                self.report(ScanErrorKind::MalformedAssignment);
                None
            },
            None => {
                self.report(ScanErrorKind::UndefinedOperator(text.to_string()));
                None
            },
        }
    }

    fn operator_token(&self, op: Operator) -> Token {
        Token::new(TokenKind::Operator(op), op.spelling(), self.token_span())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScanErrorKind;
    use crate::token::{Operator, TokenKind};
    use crate::Lexer;

    fn scan_op(source: &str) -> Option<Operator> {
        let mut lexer = Lexer::new(source);
        lexer.scan_operator().map(|t| match t.kind {
            TokenKind::Operator(op) => op,
            other => panic!("expected operator, got {:?}", other),
        })
    }

    #[test]
    fn test_every_operator() {
        for op in Operator::ALL {
            assert_eq!(scan_op(op.spelling()), Some(op), "{}", op.spelling());
        }
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(scan_op("<=1"), Some(Operator::LtEq));
        assert_eq!(scan_op("<>"), Some(Operator::NotEq));
        assert_eq!(scan_op("==="), Some(Operator::EqEq));
        assert_eq!(scan_op("+-"), Some(Operator::Plus));
        assert_eq!(scan_op("+++"), Some(Operator::PlusPlus));
    }

    #[test]
    fn test_never_extends_past_two_characters() {
        let mut lexer = Lexer::new("<<=");
        assert_eq!(
            lexer.scan_operator().map(|t| t.kind),
            Some(TokenKind::Operator(Operator::Lt))
        );
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_lone_colon_is_malformed_assignment() {
        let mut lexer = Lexer::new(":x");
        assert!(lexer.scan_operator().is_none());
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.errors()[0].kind, ScanErrorKind::MalformedAssignment);
        assert_eq!(lexer.errors()[0].lexeme(), ":");
    }

    #[test]
    fn test_colon_at_end_is_malformed_assignment() {
        let mut lexer = Lexer::new(":");
        assert!(lexer.scan_operator().is_none());
        assert_eq!(lexer.errors()[0].kind, ScanErrorKind::MalformedAssignment);
    }

    #[test]
    fn test_lone_ampersand_and_pipe_are_undefined() {
        for (source, lexeme) in [("&x", "&"), ("| ", "|"), ("&|", "&")] {
            let mut lexer = Lexer::new(source);
            assert!(lexer.scan_operator().is_none());
            assert_eq!(lexer.position(), 1);
            assert_eq!(
                lexer.errors()[0].kind,
                ScanErrorKind::UndefinedOperator(lexeme.to_string())
            );
        }
    }

    #[test]
    fn test_non_operator_start_still_progresses() {
        let mut lexer = Lexer::new("é=");
        assert!(lexer.scan_operator().is_none());
        assert_eq!(lexer.position(), 'é'.len_utf8());
        assert_eq!(
            lexer.errors()[0].kind,
            ScanErrorKind::UndefinedOperator("é".to_string())
        );
    }

    #[test]
    fn test_operator_span() {
        let mut lexer = Lexer::new(":=");
        let token = lexer.scan_operator().unwrap();
        assert_eq!(token.lexeme, ":=");
        assert_eq!((token.span.start, token.span.end), (0, 2));
        assert_eq!(token.table_index, None);
    }
}
