#[cfg(test)]
mod lexer_tests {
    use crate::error::ErrorKind;
    use crate::lexer::token::TokenKind;
    use crate::lexer::tokenize;

    fn lex_ok(input: &str) -> Vec<TokenKind> {
        let tokens = tokenize(input).unwrap_or_else(|e| panic!("Unexpected error: {e}"));
        tokens.into_iter().map(|t| t.kind).collect()
    }

    fn lex_err(input: &str) -> ErrorKind {
        tokenize(input).unwrap_err().kind
    }

    #[test]
    fn empty_input() {
        assert_eq!(lex_ok(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn skips_whitespace_and_tracks_nothing_extra() {
        assert_eq!(lex_ok("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn line_comment_consumed_to_newline() {
        assert_eq!(
            lex_ok("int x; // trailing\nint y;"),
            vec![
                TokenKind::IntType,
                TokenKind::Ident("x".into()),
                TokenKind::Semicolon,
                TokenKind::IntType,
                TokenKind::Ident("y".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn block_comment_consumed() {
        assert_eq!(
            lex_ok("/* comment\nspanning lines */int x;"),
            vec![
                TokenKind::IntType,
                TokenKind::Ident("x".into()),
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_is_syntax_error() {
        assert_eq!(lex_err("/* never closes"), ErrorKind::Syntax);
    }

    #[test]
    fn int_type_keywords_all_lex_to_int_type() {
        assert_eq!(
            lex_ok("int long char"),
            vec![TokenKind::IntType, TokenKind::IntType, TokenKind::IntType, TokenKind::Eof]
        );
    }

    #[test]
    fn reserved_words() {
        assert_eq!(
            lex_ok("return if else while for break continue void"),
            vec![
                TokenKind::Return,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Break,
                TokenKind::Continue,
                TokenKind::Void,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn identifier_vs_keyword() {
        assert_eq!(
            lex_ok("integer"),
            vec![TokenKind::Ident("integer".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn integer_literal() {
        assert_eq!(lex_ok("12345"), vec![TokenKind::IntLiteral(12345), TokenKind::Eof]);
    }

    #[test]
    fn string_literal_with_escapes() {
        assert_eq!(
            lex_ok(r#""a\nb\t\"c\\d""#),
            vec![TokenKind::StringLiteral("a\nb\t\"c\\d".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_string_is_syntax_error() {
        assert_eq!(lex_err("\"abc"), ErrorKind::Syntax);
    }

    #[test]
    fn unterminated_string_before_newline_is_syntax_error() {
        assert_eq!(lex_err("\"abc\ndef\""), ErrorKind::Syntax);
    }

    #[test]
    fn compound_symbols_take_priority_over_singles() {
        assert_eq!(
            lex_ok("<= >= == != && || ++ -- += -= *= /= %="),
            vec![
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::PlusEq,
                TokenKind::MinusEq,
                TokenKind::StarEq,
                TokenKind::SlashEq,
                TokenKind::PercentEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn single_char_symbols() {
        assert_eq!(
            lex_ok("+-*/%<>=!(){},;"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Not,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unexpected_character_is_syntax_error() {
        assert_eq!(lex_err("int x = 1 @ 2;"), ErrorKind::Syntax);
    }

    #[test]
    fn line_numbers_increment_on_newline() {
        let tokens = tokenize("int x;\nint y;\n").unwrap();
        let y_ident = tokens
            .iter()
            .find(|t| matches!(&t.kind, TokenKind::Ident(name) if name == "y"))
            .unwrap();
        assert_eq!(y_ident.line(), 2);
    }

    #[test]
    fn non_ascii_passes_through_string_literals() {
        let tokens = lex_ok("\"caf\u{00e9}\"");
        assert_eq!(tokens, vec![TokenKind::StringLiteral("caf\u{00e9}".into()), TokenKind::Eof]);
    }
}
