use std::fs;
use std::path::{Path, PathBuf};

use crate::models::puzzle_file::PuzzleFileRef;
use crate::models::workspace::WorkspaceConfig;
use crate::utils::config::{get_config_path, ConfigParser};
use crate::utils::error::{AocError, Result};
use crate::utils::validation::is_valid_workspace_name;

/// Parts created for every day
pub const SCAFFOLD_PARTS: [&str; 2] = ["a", "b"];

/// Data set created next to the canonical data file of each part
pub const SAMPLE_DATASET: &str = "sample";

/// Result of laying out a new workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub config: WorkspaceConfig,
    pub config_path: PathBuf,
    /// Data files created, relative to the workspace root
    pub created: Vec<String>,
    /// Data files that already existed and were left alone
    pub kept: Vec<String>,
}

/// Lay out a puzzle workspace at `root`: empty data files for every day and
/// part, then `aoc.toml`.
///
/// Existing data files are never touched, and an existing `aoc.toml` is only
/// replaced when `force` is set.
pub fn scaffold(root: &Path, config: WorkspaceConfig, force: bool) -> Result<ScaffoldReport> {
    let config_path = get_config_path(root);
    if config_path.exists() && !force {
        return Err(AocError::ValidationError(
            "aoc.toml already exists (use --force to overwrite)".to_string(),
        ));
    }

    let config = validated(config)?;
    fs::create_dir_all(root)?;
    let (created, kept) = write_data_layout(root, &config)?;
    ConfigParser::save_workspace_config(&config, &config_path)?;

    tracing::info!(
        root = %root.display(),
        created = created.len(),
        kept = kept.len(),
        "workspace scaffolded"
    );

    Ok(ScaffoldReport {
        config,
        config_path,
        created,
        kept,
    })
}

/// Name the workspace after its directory when that makes a valid name
pub fn named_after_directory(root: &Path, config: WorkspaceConfig) -> WorkspaceConfig {
    let dir_name = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|path| path.file_name().map(|name| name.to_string_lossy().to_string()))
        });

    match dir_name {
        Some(name) if is_valid_workspace_name(&name) => config.with_name(name),
        _ => config,
    }
}

fn validated(config: WorkspaceConfig) -> Result<WorkspaceConfig> {
    config.validate().map_err(AocError::ValidationError)?;
    Ok(config)
}

/// Every data file a fresh workspace starts with, in creation order
pub fn planned_data_files(config: &WorkspaceConfig) -> Vec<PuzzleFileRef> {
    (1..=config.workspace.days)
        .flat_map(|day| {
            SCAFFOLD_PARTS.iter().flat_map(move |part| {
                [
                    PuzzleFileRef::new(day, *part, None),
                    PuzzleFileRef::new(day, *part, Some(SAMPLE_DATASET.to_string())),
                ]
            })
        })
        .collect()
}

fn write_data_layout(root: &Path, config: &WorkspaceConfig) -> Result<(Vec<String>, Vec<String>)> {
    let mut created = Vec::new();
    let mut kept = Vec::new();

    for file in planned_data_files(config) {
        let relative = file.data_file_path();
        let path = root.join(&relative);

        if path.exists() {
            kept.push(relative);
            continue;
        }

        fs::create_dir_all(root.join(file.day_dir()))?;
        fs::write(&path, "")?;
        created.push(relative);
    }

    Ok((created, kept))
}
