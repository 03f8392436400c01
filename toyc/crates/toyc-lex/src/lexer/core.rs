//! Core lexer implementation.
//!
//! This module contains the `Lexer` state, the character classification
//! used for dispatch and the `next_token` entry point.

use std::iter::FusedIterator;

use log::{debug, trace};

use super::identifier::is_ident_start;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// Classification of the character that starts a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// The source is exhausted.
    End,
    /// A character that is a complete token by itself.
    Single(TokenKind),
    /// `/`: division or the start of a comment.
    Slash,
    /// `-`
    Minus,
    /// `<`, `>`, `=` or `!`, optionally followed by `=`.
    Comparison {
        /// Kind when followed by `=`.
        with_eq: TokenKind,
        /// Kind when used alone.
        alone: TokenKind,
    },
    /// `&` or `|`, which is only valid when doubled.
    Logical {
        /// The character itself.
        ch: char,
        /// Kind of the doubled form.
        doubled: TokenKind,
    },
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `0`-`9`
    Digit,
    /// A letter or underscore.
    IdentStart,
    /// Anything that cannot start a token.
    Other(char),
}

impl CharClass {
    /// Classifies the character `c`; `at_end` takes priority over `c`.
    pub fn of(c: char, at_end: bool) -> Self {
        if at_end {
            return CharClass::End;
        }

        match c {
            '(' => CharClass::Single(TokenKind::LeftParen),
            ')' => CharClass::Single(TokenKind::RightParen),
            '{' => CharClass::Single(TokenKind::LeftBrace),
            '}' => CharClass::Single(TokenKind::RightBrace),
            ';' => CharClass::Single(TokenKind::Semicolon),
            ',' => CharClass::Single(TokenKind::Comma),
            '*' => CharClass::Single(TokenKind::OpMultiply),
            '%' => CharClass::Single(TokenKind::OpMod),
            '+' => CharClass::Single(TokenKind::OpAdd),
            '/' => CharClass::Slash,
            '-' => CharClass::Minus,
            '<' => CharClass::Comparison {
                with_eq: TokenKind::OpLessEqual,
                alone: TokenKind::OpLess,
            },
            '>' => CharClass::Comparison {
                with_eq: TokenKind::OpGreaterEqual,
                alone: TokenKind::OpGreater,
            },
            '=' => CharClass::Comparison {
                with_eq: TokenKind::OpEqual,
                alone: TokenKind::OpAssign,
            },
            '!' => CharClass::Comparison {
                with_eq: TokenKind::OpNotEqual,
                alone: TokenKind::OpNot,
            },
            '&' => CharClass::Logical {
                ch: '&',
                doubled: TokenKind::OpAnd,
            },
            '|' => CharClass::Logical {
                ch: '|',
                doubled: TokenKind::OpOr,
            },
            '"' => CharClass::DoubleQuote,
            '\'' => CharClass::SingleQuote,
            c if c.is_ascii_digit() => CharClass::Digit,
            c if is_ident_start(c) => CharClass::IdentStart,
            c => CharClass::Other(c),
        }
    }
}

/// Lexer for toy C source text.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`]. Once the end
/// of input is reached every further call returns another End-of-input
/// token. The first lexical error halts the lexer for good: that error is
/// returned from every later call.
///
/// # Example
///
/// ```
/// use toyc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1;");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::OpAssign);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_column: u32,

    /// The error that halted the lexer, if any.
    halted: Option<LexError>,

    /// Set once the iterator has yielded its last item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the complete source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_line: 1,
            token_column: 1,
            halted: None,
            exhausted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, records the token origin and
    /// dispatches on the class of the current character.
    ///
    /// # Errors
    /// Returns a [`LexError`] located at the start of the offending token.
    /// After an error the lexer is halted and returns the same error again.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if let Some(err) = &self.halted {
            return Err(err.clone());
        }

        match self.scan_token() {
            Ok(token) => {
                trace!("token {} at {}:{}", token.kind, token.line, token.column);
                Ok(token)
            },
            Err(err) => {
                debug!("lexer halted: {}", err);
                self.halted = Some(err.clone());
                Err(err)
            },
        }
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        loop {
            self.cursor.skip_whitespace();

            self.token_start = self.cursor.position();
            self.token_line = self.cursor.line();
            self.token_column = self.cursor.column();

            let class = CharClass::of(self.cursor.current_char(), self.cursor.is_at_end());
            let kind = match class {
                CharClass::End => TokenKind::EndOfInput,
                CharClass::Single(kind) => {
                    self.cursor.advance();
                    kind
                },
                CharClass::Slash => match self.lex_slash() {
                    Some(kind) => kind,
                    None => continue,
                },
                CharClass::Minus => self.lex_minus(),
                CharClass::Comparison { with_eq, alone } => self.follow('=', with_eq, Some(alone))?,
                CharClass::Logical { ch, doubled } => self.follow(ch, doubled, None)?,
                CharClass::DoubleQuote => return self.lex_string(),
                CharClass::SingleQuote => return self.lex_char(),
                CharClass::Digit => return Ok(self.lex_integer()),
                CharClass::IdentStart => return Ok(self.lex_identifier()),
                CharClass::Other(c) => {
                    return Err(self.error(LexErrorKind::UnrecognizedCharacter(c)))
                },
            };

            return Ok(self.make_token(kind));
        }
    }

    /// Builds a payload-free token at the current token origin.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_line, self.token_column)
    }

    /// Builds a token carrying `text` at the current token origin.
    pub(crate) fn make_token_with_text(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::with_text(kind, text, self.token_line, self.token_column)
    }

    /// Builds an error located at the current token origin.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_line, self.token_column)
    }

    /// Returns the line of the next character to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column of the next character to be lexed.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be lexed.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once a lexical error has stopped the lexer.
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }
}

/// Yields every token before End-of-input, then stops.
///
/// A lexical error is yielded once, after which the iterator is exhausted.
impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.exhausted = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}
