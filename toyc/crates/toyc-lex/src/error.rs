//! Lexical error types.
//!
//! Every lexical error is fatal: the lexer stops at the first one and keeps
//! returning it.

use std::fmt;

use thiserror::Error;

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Position {
    /// Creates a position from a line and column.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token, including a lone `&` or `|`.
    #[error("unrecognized character: ({code}) '{0}'", code = code_point(.0))]
    UnrecognizedCharacter(char),

    /// A backslash in a character literal followed by anything but `n`, `t` or `r`.
    #[error("unrecognized escape sequence: \\{0}")]
    UnrecognizedEscape(char),

    /// `''`
    #[error("empty character literal")]
    EmptyCharLiteral,

    /// The source ended right after the opening quote or a backslash.
    #[error("unclosed character literal")]
    UnclosedCharLiteral,

    /// A plain character literal whose value is not followed by `'`.
    /// Carries the character found instead, the end sentinel at end of input.
    #[error("fail to close character's quote with: '{0}'")]
    UnclosedCharQuote(char),

    /// The source ended inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// A fatal lexical error and the origin of the token being scanned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct LexError {
    /// The error kind.
    pub kind: LexErrorKind,
    /// Where the offending token starts, if known.
    pub position: Option<Position>,
}

impl LexError {
    /// Creates an error located at `line`/`column`.
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self {
            kind,
            position: Some(Position::new(line, column)),
        }
    }

    /// Returns the line of the error, if located.
    pub fn line(&self) -> Option<u32> {
        self.position.map(|p| p.line)
    }

    /// Returns the column of the error, if located.
    pub fn column(&self) -> Option<u32> {
        self.position.map(|p| p.column)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(Position { line, column }) => {
                write!(f, "{} in line {}, pos {}", self.kind, line, column)
            },
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
