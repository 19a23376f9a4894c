use clap::Args;
use serde_json::json;
use std::path::Path;

use crate::services::task_runner::run_task;
use crate::services::workspace::Workspace;
use crate::utils::error::{AocError, Result};
use crate::utils::validation::validate_task_alias;

/// Maximum number of "did you mean" suggestions for an unknown task
const MAX_SUGGESTIONS: usize = 5;

/// Run a puzzle task by name
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Task name, e.g. day-1-a, 1-b-sample or 1
    pub task: String,

    /// Print the command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Additional arguments to pass to the puzzle
    #[arg(last = true)]
    pub args: Vec<String>,
}

impl RunCommand {
    /// Build a run from the words of `aoc <task> [args...]`
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        let mut words = words.into_iter();
        let task = words.next()?;
        Some(Self {
            task,
            dry_run: false,
            json: false,
            args: words.collect(),
        })
    }

    /// Execute the run command
    pub async fn execute(&self, workspace: &Path) -> Result<()> {
        validate_task_alias(&self.task)?;

        let workspace = Workspace::open(workspace)?;
        let registry = workspace.task_registry()?;

        let task = registry
            .get(&self.task)
            .ok_or_else(|| AocError::TaskNotFound {
                alias: self.task.clone(),
                suggestions: registry.suggestions(&self.task, MAX_SUGGESTIONS),
            })?;

        if self.dry_run {
            let command = task.command_with_args(&self.args);
            if self.json {
                self.print_json(&json!({
                    "task": self.task,
                    "command": command,
                }))?;
            } else {
                println!("{command}");
            }
            return Ok(());
        }

        let exit_code = run_task(task, &self.args, workspace.root()).await?;

        if self.json {
            self.print_json(&json!({
                "status": if exit_code == 0 { "success" } else { "failure" },
                "task": self.task,
                "command": task.command,
                "exit_code": exit_code,
                "args": self.args,
            }))?;
        }

        if exit_code != 0 {
            return Err(AocError::TaskFailed {
                alias: self.task.clone(),
                exit_code,
            });
        }

        Ok(())
    }

    fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| AocError::ConfigError(format!("JSON serialization error: {e}")))?;
        println!("{rendered}");
        Ok(())
    }
}
