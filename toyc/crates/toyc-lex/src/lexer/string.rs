//! String and character literal lexing.
//!
//! String literals are taken verbatim. Character literals understand the
//! `\n`, `\t` and `\r` escapes and become `Integer` tokens holding the code
//! point, since the language treats characters as small integers.

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Everything up to the closing `"` is copied as-is, including
    /// backslashes and newlines.
    ///
    /// # Errors
    /// `UnterminatedString` if the source ends before the closing quote.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }

            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '"' {
                break;
            }
            content.push(c);
        }

        Ok(self.make_token_with_text(TokenKind::String, content))
    }

    /// Lexes a character literal into an `Integer` token.
    ///
    /// The character after an escape letter is taken as the closing quote
    /// without being checked.
    ///
    /// # Errors
    /// - `UnclosedCharLiteral` if the source ends right after the opening
    ///   quote or the backslash
    /// - `UnrecognizedEscape` for a backslash escape other than `n`, `t`, `r`
    /// - `EmptyCharLiteral` for `''`
    /// - `UnclosedCharQuote` if a plain character is not followed by `'`,
    ///   end of input included
    pub fn lex_char(&mut self) -> LexResult<Token> {
        let c = self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnclosedCharLiteral));
        }

        let value = match c {
            '\\' => {
                let escape = self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(self.error(LexErrorKind::UnclosedCharLiteral));
                }
                let value = match escape {
                    'n' => 10,
                    't' => 9,
                    'r' => 13,
                    other => return Err(self.error(LexErrorKind::UnrecognizedEscape(other))),
                };
                self.cursor.advance();
                value
            },
            '\'' => return Err(self.error(LexErrorKind::EmptyCharLiteral)),
            c => {
                let close = self.cursor.advance();
                if close != '\'' {
                    return Err(self.error(LexErrorKind::UnclosedCharQuote(close)));
                }
                u32::from(c)
            },
        };
        self.cursor.advance();

        Ok(self.make_token_with_text(TokenKind::Integer, value.to_string()))
    }
}
