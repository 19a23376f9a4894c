use std::path::{Path, PathBuf};

use crate::models::registry::TaskRegistry;
use crate::models::workspace::WorkspaceConfig;
use crate::services::discovery::discover;
use crate::services::registry_merger::merge;
use crate::services::task_deriver::{ShellCommandBuilder, TaskDeriver};
use crate::utils::config::ConfigParser;
use crate::utils::error::Result;
use crate::utils::validation::validate_workspace_root;

/// A puzzle workspace on disk together with its configuration
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
}

impl Workspace {
    /// Open the workspace at `root`, reading `aoc.toml` when present
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        validate_workspace_root(root)?;
        // Discovery strips this prefix from every match, so pin it down.
        let root = root.canonicalize()?;
        let config = ConfigParser::load_or_default(&root)?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_config<P: Into<PathBuf>>(root: P, config: WorkspaceConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.workspace.name
    }

    /// Discover the current data files and build a fresh task registry
    pub fn task_registry(&self) -> Result<TaskRegistry> {
        let files = discover(&self.root, &self.config.discovery.pattern)?;
        let deriver = TaskDeriver::new(ShellCommandBuilder::new(&self.config.runner.command));
        let registry = merge(&deriver, &files);

        if registry.is_empty() {
            tracing::warn!(
                pattern = %self.config.discovery.pattern,
                root = %self.root.display(),
                "no data files found"
            );
        }
        Ok(registry)
    }
}
