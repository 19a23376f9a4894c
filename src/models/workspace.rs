use serde::{Deserialize, Serialize};

/// File name of the workspace configuration, relative to the workspace root
pub const CONFIG_FILE_NAME: &str = "aoc.toml";

/// Glob used to find data files when `[discovery].pattern` is not set
pub const DEFAULT_DATA_PATTERN: &str = "day-*/*.data*.txt";

/// Highest day `aoc init` will scaffold
pub const MAX_DAYS: u32 = 50;

/// `[workspace]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSection {
    /// Project name shown in task listings
    pub name: String,
    /// Number of days created by `aoc init`
    pub days: u32,
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        Self {
            name: "aoc".to_string(),
            days: 25,
        }
    }
}

/// `[runner]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSection {
    /// Program that executes a puzzle entry point, e.g. `tsx` or `python3`
    pub command: String,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            command: "tsx".to_string(),
        }
    }
}

/// `[discovery]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverySection {
    pub pattern: String,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATA_PATTERN.to_string(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Contents of `aoc.toml`. Every section is optional.
///
/// The value is never mutated in place: the `with_*` methods hand back an
/// updated copy, so each `aoc init` step receives the configuration produced
/// by the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub workspace: WorkspaceSection,
    pub runner: RunnerSection,
    pub discovery: DiscoverySection,
    pub logging: LoggingSection,
}

impl WorkspaceConfig {
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            workspace: WorkspaceSection {
                name: name.into(),
                ..self.workspace
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_days(self, days: u32) -> Self {
        Self {
            workspace: WorkspaceSection {
                days,
                ..self.workspace
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_runner(self, command: impl Into<String>) -> Self {
        Self {
            runner: RunnerSection {
                command: command.into(),
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_data_pattern(self, pattern: impl Into<String>) -> Self {
        Self {
            discovery: DiscoverySection {
                pattern: pattern.into(),
            },
            ..self
        }
    }

    /// Validate the configuration according to workspace rules
    pub fn validate(&self) -> Result<(), String> {
        if self.workspace.name.trim().is_empty() {
            return Err("Workspace name cannot be empty".to_string());
        }

        if !(1..=MAX_DAYS).contains(&self.workspace.days) {
            return Err(format!(
                "Invalid day count {} (must be between 1 and {MAX_DAYS})",
                self.workspace.days
            ));
        }

        if self.runner.command.trim().is_empty() {
            return Err("Runner command cannot be empty".to_string());
        }

        if self.discovery.pattern.trim().is_empty() {
            return Err("Discovery pattern cannot be empty".to_string());
        }

        Ok(())
    }
}
