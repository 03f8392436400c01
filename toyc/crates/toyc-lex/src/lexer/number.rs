//! Integer literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    ///
    /// The token text is the raw digit run: no sign, no range check and no
    /// leading-zero normalization. A letter straight after the digits starts
    /// a new token.
    pub fn lex_integer(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token_with_text(TokenKind::Integer, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).map(Result::unwrap).collect()
    }

    #[test]
    fn test_integer() {
        let tokens = lex_all("42");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "42");
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(lex_all("007")[0].text, "007");
    }

    #[test]
    fn test_no_overflow_check() {
        let digits = "99999999999999999999999999";
        assert_eq!(lex_all(digits)[0].text, digits);
    }

    #[test]
    fn test_digits_then_letters() {
        let tokens = lex_all("12ab");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "ab");
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn test_no_fractional_part() {
        assert!(Lexer::new("3.14").nth(1).unwrap().is_err());
    }
}
