//! Token definitions and the keyword table.
//!
//! The `Display` implementations produce the fixed-width listing format used
//! by the token dumps (`.lex` files), so their layout must not change.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

/// The closed set of token kinds.
///
/// Declaration order matches the listing order of the display names and has
/// no semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the source text. Always the last token.
    EndOfInput,
    /// `*`
    OpMultiply,
    /// `/`
    OpDivide,
    /// `%`
    OpMod,
    /// `+`
    OpAdd,
    /// `-`
    OpSubtract,
    /// Unary `-`. Part of the token set but never produced by the lexer.
    OpNegate,
    /// `!`
    OpNot,
    /// `<`
    OpLess,
    /// `<=`
    OpLessEqual,
    /// `>`
    OpGreater,
    /// `>=`
    OpGreaterEqual,
    /// `==`
    OpEqual,
    /// `!=`
    OpNotEqual,
    /// `=`
    OpAssign,
    /// `&&`
    OpAnd,
    /// `||`
    OpOr,
    /// `if`
    KeywordIf,
    /// `else`
    KeywordElse,
    /// `while`
    KeywordWhile,
    /// `print`
    KeywordPrint,
    /// `putc`
    KeywordPutc,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// A name that is not a keyword.
    Identifier,
    /// A decimal integer or a character literal's code point.
    Integer,
    /// A double-quoted string literal.
    String,
}

impl TokenKind {
    /// Returns the name used for this kind in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "End_of_input",
            TokenKind::OpMultiply => "Op_multiply",
            TokenKind::OpDivide => "Op_divide",
            TokenKind::OpMod => "Op_mod",
            TokenKind::OpAdd => "Op_add",
            TokenKind::OpSubtract => "Op_subtract",
            TokenKind::OpNegate => "Op_negate",
            TokenKind::OpNot => "Op_not",
            TokenKind::OpLess => "Op_less",
            TokenKind::OpLessEqual => "Op_lessequal",
            TokenKind::OpGreater => "Op_greater",
            TokenKind::OpGreaterEqual => "Op_greaterequal",
            TokenKind::OpEqual => "Op_equal",
            TokenKind::OpNotEqual => "Op_notequal",
            TokenKind::OpAssign => "Op_assign",
            TokenKind::OpAnd => "Op_and",
            TokenKind::OpOr => "Op_or",
            TokenKind::KeywordIf => "Keyword_if",
            TokenKind::KeywordElse => "Keyword_else",
            TokenKind::KeywordWhile => "Keyword_while",
            TokenKind::KeywordPrint => "Keyword_print",
            TokenKind::KeywordPutc => "Keyword_putc",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::String => "String",
        }
    }

    /// Returns true for the reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordIf
                | TokenKind::KeywordElse
                | TokenKind::KeywordWhile
                | TokenKind::KeywordPrint
                | TokenKind::KeywordPutc
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width/alignment flags apply to the name.
        f.pad(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified, position-tagged unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,

    /// Payload for identifiers, integers, strings and keywords; empty otherwise.
    pub text: String,

    /// Line of the token's first character (1-based).
    pub line: u32,

    /// Column of the token's first character (1-based).
    pub column: u32,
}

impl Token {
    /// Creates a token without a text payload.
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self::with_text(kind, String::new(), line, column)
    }

    /// Creates a token carrying `text`.
    pub fn with_text(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Returns true for the terminal End-of-input token.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:5}  {:5} {:<15}", self.line, self.column, self.kind)?;
        match self.kind {
            TokenKind::Integer => write!(f, "  {:>4}", self.text),
            TokenKind::Identifier => write!(f, " {}", self.text),
            TokenKind::String => write!(f, " \"{}\"", self.text),
            _ => Ok(()),
        }
    }
}

fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("if", TokenKind::KeywordIf);
        table.insert("else", TokenKind::KeywordElse);
        table.insert("while", TokenKind::KeywordWhile);
        table.insert("print", TokenKind::KeywordPrint);
        table.insert("putc", TokenKind::KeywordPutc);
        table
    })
}

/// Looks up the reserved kind for an exact identifier spelling.
///
/// ```
/// use toyc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::KeywordWhile));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    keyword_table().get(ident).copied()
}
