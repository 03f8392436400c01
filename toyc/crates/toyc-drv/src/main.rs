//! toyc - lexes a toy C program and prints its token listing.
//!
//! This is the main entry point for the toyc binary. It parses arguments
//! with clap, sets up logging and runs a [`Session`] over the input file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toyc_drv::{Config, DriverError, OutputFormat, Result, Session};

/// toyc - lexical analyzer for the toy C teaching language
///
/// Reads a source file and prints one line per token: line, column, token
/// kind and the value of integer, identifier and string tokens.
#[derive(Parser, Debug)]
#[command(name = "toyc")]
#[command(author = "Toyc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the toy C teaching language", long_about = None)]
struct Cli {
    /// Source file to lex
    input: PathBuf,

    /// Write the listing to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Listing format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Don't print the listing to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long, env = "TOYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOYC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!("configuration: {:?}", config);

    let session = Session::new(&cli.input, &config)
        .with_output(cli.output)
        .with_format(cli.format)
        .quiet(cli.quiet);

    let mut stdout = std::io::stdout().lock();
    session.run(&mut stdout)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so it never mixes with the listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_input() {
        let cli = Cli::parse_from(["toyc", "prime.c"]);
        assert_eq!(cli.input, PathBuf::from("prime.c"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, None);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["toyc"]).is_err());
    }

    #[test]
    fn test_cli_parse_output() {
        let cli = Cli::parse_from(["toyc", "prime.c", "-o", "prime.lex"]);
        assert_eq!(cli.output, Some(PathBuf::from("prime.lex")));
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["toyc", "prime.c", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["toyc", "prime.c", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_quiet() {
        let cli = Cli::parse_from(["toyc", "-q", "prime.c"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["toyc", "--verbose", "prime.c"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_config() {
        let cli = Cli::parse_from(["toyc", "--config", "/path/to/toyc.toml", "prime.c"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/toyc.toml")));
    }

    #[test]
    fn test_cli_parse_no_color() {
        let cli = Cli::parse_from(["toyc", "--no-color", "prime.c"]);
        assert!(cli.no_color);
    }
}
