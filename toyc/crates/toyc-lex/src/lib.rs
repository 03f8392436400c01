//! toyc-lex - Lexical Analyzer for the toy C teaching language
//!
//! This crate turns the complete source text of a program into a sequence of
//! position-tagged tokens, the first stage of the toyc pipeline. It does no
//! I/O: callers hand it a string and get tokens or a textual listing back.
//!
//! # Example Usage
//!
//! ```
//! use toyc_lex::{tokenize, Lexer, TokenKind};
//!
//! let source = "while (n > 0) { putc('*'); n = n - 1; }";
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::KeywordWhile);
//!
//! // Or lex everything, End_of_input included
//! let tokens = tokenize(source).unwrap();
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```
//!
//! # Token Categories
//!
//! - **Keywords**: `if`, `else`, `while`, `print`, `putc`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`
//! - **Integers**: decimal digit runs, and character literals such as `'a'`
//!   or `'\n'`, which lex to their code point
//! - **Strings**: `"..."`, taken verbatim without escape processing
//! - **Operators**: `* / % + - < <= > >= == != = ! && ||`
//! - **Punctuation**: `( ) { } ; ,`
//!
//! `//` and `/* */` comments are skipped. Every lexical error is fatal; see
//! [`LexError`].
//!
//! # Listing Format
//!
//! [`render_tokens`] produces one line per token: line (width 5), two
//! spaces, column (width 5), a space and the kind name left-justified to
//! width 15, followed by the payload of Integer, Identifier and String
//! tokens.
//!
//! ```
//! let listing = toyc_lex::render_tokens("x = 5;").unwrap();
//! assert_eq!(listing.lines().nth(2).unwrap(), "    1      5 Integer             5");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult, Position};
pub use lexer::{CharClass, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind};

/// Lexes `source` completely.
///
/// The returned tokens end with exactly one End-of-input token.
///
/// # Errors
/// Returns the first lexical error; no partial token list is produced.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            log::debug!("lexed {} tokens", tokens.len());
            return Ok(tokens);
        }
    }
}

/// Renders a token sequence as a listing, one newline-terminated line per token.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Lexes `source` and renders the full token listing.
///
/// # Errors
/// Returns the first lexical error; no partial listing is produced.
pub fn render_tokens(source: &str) -> LexResult<String> {
    tokenize(source).map(|tokens| render(&tokens))
}
