// CLI module for command-line interface

pub mod init;
pub mod list;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::{AocError, Result};

use self::init::InitCommand;
use self::list::ListCommand;
use self::run::RunCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "aoc")]
#[command(about = "Run daily puzzle solutions against their data sets")]
#[command(long_about = r#"aoc turns the data files of a puzzle workspace into runnable tasks.

Every file named day-<N>/<part>.data.txt or day-<N>/<part>.data.<name>.txt
becomes a task that runs the puzzle's entry point (day-<N>/<part>) against
that data set. Each task answers to several names:

  day-<N>-<part>[-<name>]    e.g. day-1-b, day-1-b-sample
  <N>-<part>[-<name>]        e.g. 1-b, 1-b-sample
  day-<N>[-<name>]           part a only, e.g. day-1, day-1-sample
  <N>[-<name>]               part a only, e.g. 1, 1-sample

Examples:
  aoc init                      Create day-1..day-25 data files and aoc.toml
  aoc 1                         Run day 1 part a against a.data.txt
  aoc 1-b-sample                Run day 1 part b against b.data.sample.txt
  aoc run day-3-a -- --debug    Pass extra arguments to the puzzle
  aoc list                      Show every task and its command"#)]
#[command(version)]
pub struct Cli {
    /// Workspace root (default: current directory)
    #[arg(short = 'C', long = "workspace", global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a puzzle workspace
    #[command(long_about = r#"Create a puzzle workspace with an empty data file layout.

Writes day-<N>/a.data.txt, day-<N>/a.data.sample.txt and the same pair for
part b for every day, plus an aoc.toml holding the workspace settings.
Existing data files are never overwritten.

Examples:
  aoc init                          Scaffold the current directory
  aoc init aoc-2024 --runner python3
  aoc init --days 12                Only create days 1 to 12
  aoc init --pattern 'day-*/*.data.txt'
                                    Ignore named data sets
  aoc init --force                  Replace an existing aoc.toml"#)]
    Init(InitCommand),

    /// Run a puzzle task by name
    Run(RunCommand),

    /// List every task discovered in the workspace
    List(ListCommand),

    /// Run a puzzle task by name (shorthand for `aoc run <task>`)
    #[command(external_subcommand)]
    Task(Vec<String>),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a parsed command line
    pub async fn execute(cli: Cli) -> Result<()> {
        let workspace = cli.workspace;

        match cli.command {
            Commands::Init(cmd) => cmd.run(&workspace).await,
            Commands::Run(cmd) => cmd.execute(&workspace).await,
            Commands::List(cmd) => cmd.execute(&workspace).await,
            Commands::Task(words) => {
                let cmd = RunCommand::from_words(words).ok_or_else(|| {
                    AocError::ValidationError("Task name required.".to_string())
                })?;
                cmd.execute(&workspace).await
            }
        }
    }
}
