//! Edge case tests for lexc-lex

#[cfg(test)]
mod tests {
    use crate::{analyze, AnalysisResult, Delimiter, Operator, ScanErrorKind, TokenKind};
    use proptest::prelude::*;

    fn kinds(result: &AnalysisResult) -> Vec<TokenKind> {
        result.tokens().iter().map(|t| t.kind).collect()
    }

    fn error_kinds(result: &AnalysisResult) -> Vec<ScanErrorKind> {
        result.errors().iter().map(|e| e.kind.clone()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_terminator_only() {
        let result = analyze("#");
        assert_eq!(kinds(&result), vec![TokenKind::Delimiter(Delimiter::Terminator)]);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let result = analyze("x");
        assert_eq!(kinds(&result), vec![TokenKind::Identifier]);
        assert_eq!(error_kinds(&result), vec![ScanErrorKind::Unterminated]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let result = analyze(&format!("{} := 1#", name));
        assert_eq!(result.identifiers().values().next(), Some(&name));
    }

    #[test]
    fn test_edge_long_integer_is_still_finite() {
        let digits = format!("1{}", "0".repeat(300));
        let result = analyze(&format!("{}#", digits));
        assert!(result.errors().is_empty());
        assert_eq!(result.constants().len(), 1);
    }

    #[test]
    fn test_edge_crlf_line_tracking() {
        let result = analyze("a\r\nb\r\n#");
        let positions: Vec<(u32, u32)> = result
            .tokens()
            .iter()
            .map(|t| (t.span.line, t.span.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_edge_unicode_whitespace_is_skipped() {
        let result = analyze("x\u{00A0}\u{2003}y#");
        assert_eq!(result.tokens().len(), 3);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_edge_non_ascii_digit_is_unrecognized() {
        let result = analyze("٣#");
        assert_eq!(
            error_kinds(&result),
            vec![ScanErrorKind::UnrecognizedCharacter("٣".to_string())]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        let result = analyze("x:=-1#");
        assert_eq!(
            kinds(&result),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Assign),
                TokenKind::Operator(Operator::Minus),
                TokenKind::Number,
                TokenKind::Delimiter(Delimiter::Terminator),
            ]
        );
    }

    #[test]
    fn test_edge_reversed_comparison_splits() {
        let result = analyze("a=<b#");
        assert_eq!(
            kinds(&result)[1..3],
            [
                TokenKind::Operator(Operator::Eq),
                TokenKind::Operator(Operator::Lt)
            ]
        );
    }

    #[test]
    fn test_edge_increment_decrement_pairs() {
        let result = analyze("++--+#");
        assert_eq!(
            kinds(&result),
            vec![
                TokenKind::Operator(Operator::PlusPlus),
                TokenKind::Operator(Operator::MinusMinus),
                TokenKind::Operator(Operator::Plus),
                TokenKind::Delimiter(Delimiter::Terminator),
            ]
        );
    }

    #[test]
    fn test_edge_double_point() {
        let result = analyze("1..2#");
        assert_eq!(
            error_kinds(&result),
            vec![ScanErrorKind::MultipleDecimalPoints("1..2".to_string())]
        );
    }

    #[test]
    fn test_edge_member_access_is_not_supported() {
        let result = analyze("x.y#");
        assert_eq!(kinds(&result)[0], TokenKind::Identifier);
        assert_eq!(
            error_kinds(&result),
            vec![ScanErrorKind::MissingDigits(".y".to_string())]
        );
    }

    #[test]
    fn test_edge_number_then_paren() {
        let result = analyze("f(10)#");
        assert!(result.errors().is_empty());
        assert_eq!(result.tokens().len(), 5);
    }

    #[test]
    fn test_edge_error_positions_are_byte_offsets() {
        let result = analyze("αβ $#");
        assert_eq!(result.errors()[0].position(), 5);
        assert_eq!(result.errors()[0].span.column, 4);
    }

    #[test]
    fn test_edge_terminator_in_middle_then_more() {
        let result = analyze("a # b");
        assert!(!result.is_terminated());
        assert_eq!(error_kinds(&result), vec![ScanErrorKind::Unterminated]);
    }

    #[test]
    fn test_edge_lone_dot() {
        let result = analyze(". #");
        assert_eq!(
            error_kinds(&result),
            vec![ScanErrorKind::MissingDigits(".".to_string())]
        );
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_scan_terminates_and_covers_input() {
        proptest!(|(source in "\\PC{0,200}")| {
            let result = analyze(&source);
            let mut last_end = 0;
            for token in result.tokens() {
                prop_assert!(token.span.start >= last_end);
                prop_assert!(token.span.end > token.span.start);
                prop_assert_eq!(&source[token.span.start..token.span.end], token.lexeme.as_str());
                last_end = token.span.end;
            }
            let positions: Vec<usize> = result.errors().iter().map(|e| e.position()).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(positions.iter().all(|&p| p <= source.len()));
        });
    }

    #[test]
    fn test_property_equal_identifiers_share_an_index() {
        proptest!(|(source in "[a-c_0-9 $:=+.#]{0,80}")| {
            let result = analyze(&source);
            let identifiers: Vec<_> = result
                .tokens()
                .iter()
                .filter(|t| t.kind == TokenKind::Identifier)
                .collect();
            for a in &identifiers {
                for b in &identifiers {
                    prop_assert_eq!(a.lexeme == b.lexeme, a.table_index == b.table_index);
                }
            }
            prop_assert_eq!(
                result.identifiers().len(),
                identifiers
                    .iter()
                    .map(|t| t.lexeme.as_str())
                    .collect::<std::collections::HashSet<_>>()
                    .len()
            );
        });
    }

    #[test]
    fn test_property_roundtrip_lexemes_rescan_to_same_kinds() {
        proptest!(|(source in "[a-z0-9_.:=<>+*/&|;,()# \n$-]{0,80}")| {
            let first = analyze(&source);
            let joined = first
                .tokens()
                .iter()
                .map(|t| t.lexeme.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let second = analyze(&joined);
            prop_assert_eq!(kinds(&first), kinds(&second));
            prop_assert!(second
                .errors()
                .iter()
                .all(|e| e.kind == ScanErrorKind::Unterminated));
        });
    }

    #[test]
    fn test_property_idempotent() {
        proptest!(|(source in "\\PC{0,120}")| {
            prop_assert_eq!(analyze(&source), analyze(&source));
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        proptest!(|(spaces in 0..50usize)| {
            let padding = " ".repeat(spaces);
            let result = analyze(&format!("{0}if{0}#{0}", padding));
            prop_assert_eq!(result.tokens().len(), 2);
            prop_assert!(result.errors().is_empty());
        });
    }
}
