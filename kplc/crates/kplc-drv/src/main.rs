//! kplc - KPL lexical scanner.
//!
//! Dumps the tokens of one source file to stdout and lexical diagnostics to
//! stderr. Exits 0 once the file has been scanned, whatever it contained.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kplc_drv::{Config, DriverError, EmitFormat, Options, Session};

/// kplc - Lexical scanner for the KPL teaching language
#[derive(Parser, Debug)]
#[command(name = "kplc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for the KPL teaching language", long_about = None)]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "KPLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "KPLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "KPLC_NO_COLOR")]
    no_color: bool,

    /// Token dump format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<EmitFormat>,

    /// Show the source line under each diagnostic
    #[arg(long, overrides_with = "no_snippets")]
    snippets: bool,

    /// Hide source lines even if the config file enables them
    #[arg(long, overrides_with = "snippets")]
    no_snippets: bool,

    /// Print per-kind token counts after the dump
    #[arg(long, overrides_with = "no_stats")]
    stats: bool,

    /// Skip token counts even if the config file enables them
    #[arg(long, overrides_with = "stats")]
    no_stats: bool,
}

impl Cli {
    /// Resolve scan options; command-line flags win over the config file.
    fn options(&self, config: &Config) -> Options {
        let from_config = Options::from_config(config);
        Options {
            format: self.format.unwrap_or(from_config.format),
            snippets: switch(self.snippets, self.no_snippets, from_config.snippets),
            stats: switch(self.stats, self.no_stats, from_config.stats),
        }
    }
}

/// Resolve an `--x`/`--no-x` flag pair, falling back to `default`.
fn switch(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let options = cli.options(&config);
    tracing::debug!(?options, "resolved options");

    let session = Session::open(&cli.input, options)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = stderr.lock();

    session.scan(&mut out, &mut err)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Install a stderr logger; `--verbose` forces `debug`, otherwise `RUST_LOG`
/// or `warn` applies.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config, DriverError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
