//! Lexer module.
//!
//! The lexer implementation is split by token family:
//! - `core` - Lexer state, character classes and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator lexing and two-character lookahead
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{CharClass, Lexer};
