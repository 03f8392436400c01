//! toyc-drv - Lexer Driver
//!
//! Loads a toy C source file, runs it through `toyc-lex` and sends the token
//! listing to stdout and, optionally, to a file.

pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, OutputFormat};
pub use error::{DriverError, Result};
pub use session::{load_source, normalize_source, Session};
