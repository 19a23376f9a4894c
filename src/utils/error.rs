// Common error types for the aoc CLI

use std::fmt;

/// Application-level errors surfaced by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum AocError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// No discovered data file produced the requested alias
    #[error("Task '{alias}' not found")]
    TaskNotFound {
        alias: String,
        suggestions: Vec<String>,
    },

    /// The puzzle runner exited unsuccessfully
    #[error("Task '{alias}' failed with exit code {exit_code}")]
    TaskFailed { alias: String, exit_code: i32 },
}

pub type Result<T> = std::result::Result<T, AocError>;

/// Printable form of an [`AocError`] together with the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_aoc_error(err: &AocError) -> Self {
        match err {
            AocError::TaskNotFound { alias, suggestions } => {
                let hint = if suggestions.is_empty() {
                    "Use 'aoc list' to see all available tasks.".to_string()
                } else {
                    format!(
                        "Did you mean one of these?\n  {}\n\nUse 'aoc list' to see all available tasks.",
                        suggestions.join("\n  ")
                    )
                };
                Self {
                    message: format!("Task '{alias}' not found."),
                    hint: Some(hint),
                    exit_code: 1,
                }
            }
            AocError::TaskFailed { exit_code, .. } => Self {
                message: err.to_string(),
                hint: None,
                // A signal-terminated child reports -1; still exit non-zero.
                exit_code: if *exit_code > 0 { *exit_code } else { 1 },
            },
            AocError::ConfigError(_) => Self {
                message: err.to_string(),
                hint: Some("Check aoc.toml in the workspace root.".to_string()),
                exit_code: 1,
            },
            AocError::IoError(_) | AocError::ValidationError(_) => Self {
                message: err.to_string(),
                hint: None,
                exit_code: 1,
            },
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n\n{hint}")?;
        }
        Ok(())
    }
}
