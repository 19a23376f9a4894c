// aoc - puzzle workspace starter and task runner
// Main CLI entry point

use aoc_starter::cli::{Cli, CliDispatcher};
use aoc_starter::models::workspace::LoggingSection;
use aoc_starter::utils::config::ConfigParser;
use aoc_starter::utils::error::UserError;
use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // A broken aoc.toml is reported by the command itself.
    let log_level = ConfigParser::load_or_default(&cli.workspace)
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| LoggingSection::default().level);
    init_tracing(cli.verbose, &log_level);

    let result = CliDispatcher::execute(cli).await;

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        let user_error = UserError::from_aoc_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}

/// Log to stderr. `RUST_LOG` wins, then `-v` flags, then `[logging].level`.
fn init_tracing(verbose: u8, configured_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => {
            let level = match verbose {
                0 => configured_level,
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
