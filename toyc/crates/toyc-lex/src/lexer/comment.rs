//! Comment skipping.
//!
//! Both skippers are entered after the opening `//` or `/*` has been consumed.

use log::debug;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the body of a line comment, stopping before the newline.
    pub fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips the body of a block comment up to and including `*/`.
    ///
    /// Block comments do not nest. Reaching the end of input first is not an
    /// error: the comment simply runs to the end.
    pub fn skip_block_comment(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                debug!(
                    "block comment opened at {}:{} runs to end of input",
                    self.token_line, self.token_column
                );
                return;
            }

            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '*' && self.cursor.match_char('/') {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn texts(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .map(|t| {
                let t = t.unwrap();
                (t.kind, t.text)
            })
            .collect()
    }

    #[test]
    fn test_skip_block_comment() {
        assert_eq!(
            texts("1 /* comment with * and / inside */ 2"),
            vec![
                (TokenKind::Integer, "1".to_string()),
                (TokenKind::Integer, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_skip_line_comment() {
        let tokens: Vec<_> = Lexer::new("1 // trailing\n2").map(Result::unwrap).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].text.as_str(), tokens[0].line), ("1", 1));
        assert_eq!((tokens[1].text.as_str(), tokens[1].line), ("2", 2));
        assert_eq!(tokens[1].column, 1);
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let mut lexer = Lexer::new("x // no newline");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert!(lexer.next_token().unwrap().is_end());
    }

    #[test]
    fn test_block_comment_star_runs() {
        assert_eq!(
            texts("a /***/ b /** x **/ c"),
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Identifier, "b".to_string()),
                (TokenKind::Identifier, "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        assert_eq!(
            texts("/* a /* b */ c */"),
            vec![
                (TokenKind::Identifier, "c".to_string()),
                (TokenKind::OpMultiply, String::new()),
                (TokenKind::OpDivide, String::new()),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_silent() {
        let mut lexer = Lexer::new("10/*/2");
        assert_eq!(lexer.next_token().unwrap().text, "10");
        assert!(lexer.next_token().unwrap().is_end());
        assert!(!lexer.is_halted());
    }

    #[test]
    fn test_consecutive_comments() {
        let source = "// one\n/* two */ // three\n/*\nfour\n*/ putc";
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::KeywordPutc);
        assert_eq!((token.line, token.column), (5, 4));
    }

    #[test]
    fn test_many_comments_do_not_recurse() {
        let source = "/**/".repeat(100_000) + "x";
        let mut lexer = Lexer::new(&source);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    }
}
