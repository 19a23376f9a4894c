// Common validation utilities for aoc CLI commands

use crate::models::workspace::MAX_DAYS;
use crate::utils::error::{AocError, Result};
use std::path::Path;

/// Validate a task alias given to `aoc run`
pub fn validate_task_alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(AocError::ValidationError(
            "Task name cannot be empty.\n\nUsage: aoc run <task>\nExample: aoc run day-1-a-sample".to_string(),
        ));
    }

    if alias.contains("..") || alias.contains('/') || alias.contains('\\') {
        return Err(AocError::ValidationError(format!(
            "Invalid task name '{alias}' - cannot contain path separators or '..'.\n\nTask names look like:\n  day-1-a\n  1-a-sample\n  1"
        )));
    }

    if alias.chars().any(char::is_whitespace) {
        return Err(AocError::ValidationError(format!(
            "Invalid task name '{alias}' - cannot contain whitespace."
        )));
    }

    Ok(())
}

/// Whether `name` can be used as a workspace name
pub fn is_valid_workspace_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        && !name.starts_with('-')
        && !name.ends_with('-')
}

/// Validate the number of days to scaffold
pub fn validate_day_count(days: u32) -> Result<()> {
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(AocError::ValidationError(format!(
            "Invalid day count {days} (must be between 1 and {MAX_DAYS})"
        )));
    }

    Ok(())
}

/// Validate that a workspace root exists and is a directory
pub fn validate_workspace_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AocError::ConfigError(format!(
            "Workspace directory '{}' not found.\n\nTo create a new workspace:\n  aoc init {}",
            path.display(),
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(AocError::ConfigError(format!(
            "'{}' is not a directory.",
            path.display()
        )));
    }

    Ok(())
}
