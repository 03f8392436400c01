//! Operator lexing.
//!
//! Single-character operators are handled directly by the dispatcher; this
//! module covers the ones that need a character of lookahead.

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator that may be followed by `expect`.
    ///
    /// Consumes the operator character, then consumes `expect` if it comes
    /// next and returns `matched`. Otherwise returns `unmatched` without
    /// consuming anything more. An `unmatched` of `None` means the single
    /// form is not a token, which is a fatal error at the token origin.
    ///
    /// Handles: `<=`/`<`, `>=`/`>`, `==`/`=`, `!=`/`!`, `&&`, `||`
    pub fn follow(
        &mut self,
        expect: char,
        matched: TokenKind,
        unmatched: Option<TokenKind>,
    ) -> LexResult<TokenKind> {
        let first = self.cursor.current_char();
        self.cursor.advance();

        if self.cursor.match_char(expect) {
            return Ok(matched);
        }

        unmatched.ok_or_else(|| self.error(LexErrorKind::UnrecognizedCharacter(first)))
    }

    /// Lexes minus.
    ///
    /// Always binary subtraction: telling unary negation apart is left to
    /// the parser, so `Op_negate` is never produced here.
    pub fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::OpSubtract
    }

    /// Lexes slash or the start of a comment.
    ///
    /// Returns `None` after skipping a `//` or `/* */` comment, in which
    /// case the caller moves on to the next real token. A lone `/` is
    /// division and only the slash itself is consumed.
    pub fn lex_slash(&mut self) -> Option<TokenKind> {
        self.cursor.advance();

        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }

        if self.cursor.match_char('*') {
            self.skip_block_comment();
            return None;
        }

        Some(TokenKind::OpDivide)
    }
}
