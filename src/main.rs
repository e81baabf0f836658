//! Bootstrap entry point.
//!
//! Parses the command line, wires up logging, and maps run failures to
//! remediation text and process exit codes. All real work lives in the
//! library.

use clap::Parser;
use enm_bootstrap::{run, BootstrapConfig, BootstrapError, RunOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "enm-bootstrap", version, about = "Bootstrap installer for the ENM Clicker desktop app")]
struct Cli {
    /// Run the installer in command-line mode even when a GUI is available.
    #[arg(long)]
    cli: bool,

    /// Assume yes at the command-line fallback prompt (non-interactive use).
    #[arg(long, short = 'y')]
    yes: bool,

    /// Directory the installer payload is saved to and run from.
    #[arg(long, default_value = ".")]
    install_root: PathBuf,
}

/// Prompt on the terminal for the command-line fallback.
fn confirm_on_stdin() -> bool {
    print!("Continue with the command-line installer? [y/N] ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = BootstrapConfig::with_install_root(cli.install_root);
    let options = RunOptions { force_cli: cli.cli };

    println!("ENM Clicker bootstrap v{}", env!("CARGO_PKG_VERSION"));

    let assume_yes = cli.yes;
    let outcome = run(&config, &options, move || assume_yes || confirm_on_stdin()).await;

    match outcome {
        Ok(()) => println!("Done."),
        Err(error) => {
            eprintln!("error: {error}");
            if let BootstrapError::Fetch(fetch_error) = &error {
                for attempt in fetch_error.attempts() {
                    eprintln!("  {attempt}");
                }
            }
            eprintln!("{}", error.remediation(&config));
            std::process::exit(error.exit_code());
        }
    }
}
