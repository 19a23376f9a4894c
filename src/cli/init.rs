use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::workspace::WorkspaceConfig;
use crate::services::scaffold::{named_after_directory, scaffold};
use crate::utils::error::{AocError, Result};
use crate::utils::validation::{is_valid_workspace_name, validate_day_count};

/// Create a puzzle workspace with an empty data file layout
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the workspace in (default: the workspace root)
    pub dir: Option<PathBuf>,

    /// Workspace name (default: directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Number of days to create
    #[arg(long, default_value_t = 25)]
    pub days: u32,

    /// Program that runs a puzzle entry point
    #[arg(long)]
    pub runner: Option<String>,

    /// Glob (relative to the workspace) that finds data files
    #[arg(long)]
    pub pattern: Option<String>,

    /// Overwrite an existing aoc.toml
    #[arg(long)]
    pub force: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for init command
#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub status: String,
    pub workspace_name: String,
    pub root: String,
    pub config_path: String,
    pub days: u32,
    pub runner: String,
    pub created_files: usize,
    pub kept_files: usize,
}

impl InitCommand {
    /// Execute the init command
    pub async fn run(&self, workspace: &Path) -> Result<()> {
        let root = match &self.dir {
            Some(dir) => workspace.join(dir),
            None => workspace.to_path_buf(),
        };

        let config = self.build_config(&root)?;
        let report = scaffold(&root, config, self.force)?;

        if self.json {
            let response = InitResponse {
                status: "success".to_string(),
                workspace_name: report.config.workspace.name.clone(),
                root: root.display().to_string(),
                config_path: report.config_path.display().to_string(),
                days: report.config.workspace.days,
                runner: report.config.runner.command.clone(),
                created_files: report.created.len(),
                kept_files: report.kept.len(),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                AocError::ValidationError(format!("Failed to serialize JSON response: {e}"))
            })?;

            println!("{json_output}");
        } else {
            println!(
                "Created aoc.toml for {} ({} days) in {}",
                report.config.workspace.name,
                report.config.workspace.days,
                root.display()
            );
            println!(
                "Data files: {} created, {} already present",
                report.created.len(),
                report.kept.len()
            );
            println!("\nPaste your puzzle input into day-1/a.data.txt, then run: aoc 1");
        }

        Ok(())
    }

    /// Assemble the configuration from the command-line flags
    fn build_config(&self, root: &Path) -> Result<WorkspaceConfig> {
        validate_day_count(self.days)?;

        let config = WorkspaceConfig::default().with_days(self.days);

        let config = match &self.name {
            Some(name) if is_valid_workspace_name(name) => config.with_name(name.clone()),
            Some(name) => {
                return Err(AocError::ValidationError(format!(
                    "Invalid workspace name '{name}' (letters, digits, '-' and '_' only)"
                )))
            }
            None => named_after_directory(root, config),
        };

        let config = match &self.runner {
            Some(runner) => config.with_runner(runner.clone()),
            None => config,
        };

        let config = match &self.pattern {
            Some(pattern) => {
                glob::Pattern::new(pattern).map_err(|e| {
                    AocError::ValidationError(format!("Invalid data file pattern '{pattern}': {e}"))
                })?;
                config.with_data_pattern(pattern.clone())
            }
            None => config,
        };

        Ok(config)
    }
}
