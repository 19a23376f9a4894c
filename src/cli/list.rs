use clap::Args;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

use crate::services::workspace::Workspace;
use crate::utils::error::{AocError, Result};

/// List every task discovered in the workspace
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Execute the list command
    pub async fn execute(&self, workspace: &Path) -> Result<()> {
        let workspace = Workspace::open(workspace)?;
        let registry = workspace.task_registry()?;

        if self.json {
            let tasks: BTreeMap<&str, &str> = registry
                .iter()
                .map(|(alias, task)| (alias.as_str(), task.command.as_str()))
                .collect();

            let response = json!({
                "workspace": workspace.name(),
                "tasks": tasks,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| AocError::ConfigError(format!("JSON serialization error: {e}")))?
            );
            return Ok(());
        }

        if registry.is_empty() {
            println!("No tasks found in workspace '{}'.", workspace.name());
            println!(
                "\nAdd data files matching '{}', for example:",
                workspace.config().discovery.pattern
            );
            println!("  day-1/a.data.txt");
            println!("  day-1/a.data.sample.txt");
            return Ok(());
        }

        println!("Available tasks in '{}':", workspace.name());
        for (command, aliases) in registry.grouped_by_command() {
            let names: Vec<&str> = aliases.iter().map(|alias| alias.as_str()).collect();
            println!("  {command}");
            println!("    {}", names.join(", "));
        }

        Ok(())
    }
}
