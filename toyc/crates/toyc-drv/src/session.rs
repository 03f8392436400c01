//! Lexing session.
//!
//! A [`Session`] carries everything one driver run needs: which file to
//! read, where the listing goes and in which format. [`Session::run`] loads
//! the source, lexes it and hands the rendered listing to its sinks.

use std::io::Write;
use std::path::{Path, PathBuf};

use toyc_lex::{tokenize, Token};
use tracing::{debug, info, warn};

use crate::config::{Config, OutputFormat};
use crate::error::{DriverError, Result};

/// Re-joins the lines of `text` with `\n`.
///
/// `\r\n` line endings become `\n` and every line, the last one included,
/// ends with a newline. Empty input stays empty.
pub fn normalize_source(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Reads a source file and normalizes its line endings.
pub fn load_source(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
    info!("read {} ({} bytes)", path.display(), text.len());
    Ok(normalize_source(&text))
}

/// Renders lexed tokens in the requested format.
pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(toyc_lex::render(tokens)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(tokens)?;
            json.push('\n');
            Ok(json)
        },
    }
}

/// One driver run over a single input file.
#[derive(Debug, Clone)]
pub struct Session {
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    echo: bool,
}

impl Session {
    /// Creates a session for `input` using the settings in `config`.
    pub fn new(input: impl Into<PathBuf>, config: &Config) -> Self {
        let input = input.into();
        let output = config.derived_output(&input);
        Self {
            input,
            output,
            format: config.format,
            echo: config.echo,
        }
    }

    /// Overrides the output file. `None` keeps the configured one.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if output.is_some() {
            self.output = output;
        }
        self
    }

    /// Overrides the listing format. `None` keeps the configured one.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Suppresses the stdout echo.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.echo &= !quiet;
        self
    }

    /// The input file.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The file the listing is written to, if any.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// The listing format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Lexes a source text and renders its listing.
    ///
    /// # Errors
    /// Returns the first lexical error; nothing is rendered in that case.
    pub fn lex_source(&self, source: &str) -> Result<String> {
        let tokens = tokenize(source)?;
        debug!("{} tokens from {}", tokens.len(), self.input.display());
        render(&tokens, self.format)
    }

    /// Runs the session, echoing the listing to `stdout` when enabled.
    ///
    /// A lexical error stops the run before anything is echoed or written.
    pub fn run<W: Write>(&self, stdout: &mut W) -> Result<()> {
        let source = load_source(&self.input)?;
        let listing = match self.lex_source(&source) {
            Ok(listing) => listing,
            Err(err) if err.is_lexical() => {
                info!("{} rejected, nothing echoed or written", self.input.display());
                return Err(err);
            },
            Err(err) => {
                warn!("rendering {} failed", self.input.display());
                return Err(err);
            },
        };

        if self.echo {
            stdout
                .write_all(listing.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| DriverError::io("<stdout>", e))?;
        }

        if let Some(path) = &self.output {
            std::fs::write(path, &listing).map_err(|e| DriverError::io(path, e))?;
            info!("wrote {}", path.display());
        }

        Ok(())
    }
}
