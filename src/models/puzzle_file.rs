use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Part that receives the day-only alias shorthand (`day-1`, `1`)
pub const DEFAULT_PART: &str = "a";

static PUZZLE_PATH_REGEX: OnceLock<Regex> = OnceLock::new();

fn puzzle_path_regex() -> &'static Regex {
    PUZZLE_PATH_REGEX.get_or_init(|| {
        Regex::new(r"^day-(?P<day>[^/]+)/(?P<file>[^/]+)$").expect("puzzle path regex is valid")
    })
}

/// A discovered data file, identified by day, part and optional data set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleFileRef {
    /// Puzzle day (1-25 by convention, not enforced)
    pub day: u32,
    /// Day as spelled in the directory name, e.g. `01` for `day-01`
    pub day_label: String,
    /// Puzzle part, conventionally `a` or `b`
    pub part: String,
    /// Named alternate data set; `None` is the canonical data for the part
    pub dataset_name: Option<String>,
}

/// Reasons a path does not have the `day-<N>/<part>.data[.<name>].txt` shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathShapeError {
    #[error("'{path}' is not of the form day-<N>/<file>")]
    NotAPuzzlePath { path: String },

    #[error("'{path}' has an invalid day '{day}'")]
    InvalidDay { path: String, day: String },

    #[error("'{path}' has an empty part identifier")]
    EmptyPart { path: String },

    #[error("'{path}' has {found} dot-separated segments, expected at least 3")]
    TooFewSegments { path: String, found: usize },
}

impl PuzzleFileRef {
    pub fn new(day: u32, part: impl Into<String>, dataset_name: Option<String>) -> Self {
        Self {
            day,
            day_label: day.to_string(),
            part: part.into(),
            dataset_name,
        }
    }

    /// Parse a workspace-relative data file path.
    ///
    /// The data set is read with a segment-count rule over the whole path:
    /// three dot-separated segments (`a.data.txt`) mean the canonical data
    /// set, anything more takes the third segment as the data set name. A
    /// data set name that itself contains a dot is unsupported, so
    /// `day-1/a.data.v1.2.txt` yields the data set `v1`. An empty third
    /// segment (`a.data..txt`) counts as the canonical data set.
    pub fn parse(path: &str) -> Result<Self, PathShapeError> {
        let normalized = path.replace('\\', "/");

        let captures = puzzle_path_regex()
            .captures(&normalized)
            .ok_or_else(|| PathShapeError::NotAPuzzlePath {
                path: normalized.clone(),
            })?;

        let day_token = &captures["day"];
        let day = Some(day_token)
            .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|token| token.parse::<u32>().ok())
            .ok_or_else(|| PathShapeError::InvalidDay {
                path: normalized.clone(),
                day: day_token.to_string(),
            })?;
        // Aliases and entry point keep the directory's spelling (`day-01` stays `01`).
        let day_label = day_token.to_string();

        let part = captures["file"]
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        if part.is_empty() {
            return Err(PathShapeError::EmptyPart { path: normalized });
        }

        let segment_count = normalized.split('.').count();
        let dataset_name = match segment_count {
            0..=2 => {
                return Err(PathShapeError::TooFewSegments {
                    path: normalized,
                    found: segment_count,
                })
            }
            3 => None,
            _ => normalized
                .split('.')
                .nth(2)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        };

        Ok(Self {
            day,
            day_label,
            part,
            dataset_name,
        })
    }

    /// Whether this file belongs to the part that owns the day-only aliases
    pub fn is_default_part(&self) -> bool {
        self.part == DEFAULT_PART
    }

    /// `-<name>` when a data set is present, empty otherwise
    pub fn dataset_suffix(&self) -> String {
        self.dataset_name
            .as_ref()
            .map(|name| format!("-{name}"))
            .unwrap_or_default()
    }

    /// Directory holding this puzzle's files, e.g. `day-3`
    pub fn day_dir(&self) -> String {
        format!("day-{}", self.day_label)
    }

    /// Path of the puzzle entry point relative to the workspace, e.g. `day-3/a`
    pub fn entry_point(&self) -> String {
        format!("{}/{}", self.day_dir(), self.part)
    }

    /// Relative path of the data file this reference was parsed from
    pub fn data_file_path(&self) -> String {
        match &self.dataset_name {
            Some(name) => format!("{}/{}.data.{name}.txt", self.day_dir(), self.part),
            None => format!("{}/{}.data.txt", self.day_dir(), self.part),
        }
    }
}

impl fmt::Display for PuzzleFileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} part {}", self.day_label, self.part)?;
        if let Some(name) = &self.dataset_name {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}
