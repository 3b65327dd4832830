use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use elang::{driver::driver::compile, render_error};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// E Language Compiler
#[derive(Parser)]
#[command(name = "elc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// .e input file
    input: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the version banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    if !cli.no_banner {
        println!("E Language Compiler - version 0.0p\n");
    }

    let compilation = match compile(&cli.input) {
        Ok(compilation) => compilation,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for token in &compilation.tokens {
        println!("{}", token);
    }

    for diagnostic in &compilation.diagnostics {
        eprint!("{}", render_error(diagnostic, &compilation.source));
    }

    match compilation.check() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
