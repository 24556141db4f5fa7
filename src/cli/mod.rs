//! Command-line interface for files-bundler
//!
//! Provides `bundle`, `create-rsp` and `completions` subcommands. Arguments of
//! the form `@file` are replaced by the contents of that response file before
//! parsing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::response::expand_args;

pub mod bundle;
pub mod create_rsp;

/// Bundle source files of selected languages into a single file
#[derive(Parser)]
#[command(name = "files-bundler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Arguments may be read from a response file with @FILE (see create-rsp).")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle code files into a single file
    Bundle(bundle::BundleArgs),

    /// Interactively generate a response file for the bundle command
    CreateRsp,

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let args = expand_args(std::env::args_os())?;
    let cli = Cli::parse_from(args);

    let filter = EnvFilter::new(log_directives(std::env::var("RUST_LOG").ok().as_deref(), cli.verbose));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Bundle(args) => bundle::run(args),
        Commands::CreateRsp => create_rsp::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "files-bundler", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// `RUST_LOG` when it is set, otherwise `debug` with `--verbose` and `warn` without.
fn log_directives(rust_log: Option<&str>, verbose: bool) -> String {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => directives.to_string(),
        None if verbose => "debug".to_string(),
        None => "warn".to_string(),
    }
}
