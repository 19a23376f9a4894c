// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::workspace::{WorkspaceConfig, CONFIG_FILE_NAME};
use crate::utils::error::{AocError, Result};

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load the workspace configuration, falling back to defaults when the
    /// workspace has no `aoc.toml`
    pub fn load_or_default<P: AsRef<Path>>(workspace_root: P) -> Result<WorkspaceConfig> {
        let path = get_config_path(workspace_root.as_ref());
        if path.exists() {
            Self::load_workspace_config(&path)
        } else {
            tracing::debug!(path = %path.display(), "no workspace config, using defaults");
            Ok(WorkspaceConfig::default())
        }
    }

    /// Load and validate a workspace configuration from an `aoc.toml` file
    pub fn load_workspace_config<P: AsRef<Path>>(path: P) -> Result<WorkspaceConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AocError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AocError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_workspace_config(&content)
    }

    /// Parse a workspace configuration from a TOML string
    pub fn parse_workspace_config(content: &str) -> Result<WorkspaceConfig> {
        let config: WorkspaceConfig = toml::from_str(content)
            .map_err(|e| AocError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        config.validate().map_err(AocError::ValidationError)?;

        Ok(config)
    }

    /// Render a workspace configuration as TOML
    pub fn render_workspace_config(config: &WorkspaceConfig) -> Result<String> {
        config.validate().map_err(AocError::ValidationError)?;

        toml::to_string_pretty(config).map_err(|e| {
            AocError::ConfigError(format!("Failed to serialize configuration: {e}"))
        })
    }

    /// Save a workspace configuration to a TOML file
    pub fn save_workspace_config<P: AsRef<Path>>(config: &WorkspaceConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = Self::render_workspace_config(config)?;

        fs::write(path, content).map_err(|e| {
            AocError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

pub fn get_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIG_FILE_NAME)
}
