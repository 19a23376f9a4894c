use std::path::Path;

use crate::utils::error::{AocError, Result};

/// Find data files under `root` matching `pattern`.
///
/// Returns paths relative to `root`, `/`-separated and sorted, so the same
/// file set always yields the same merge order.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<String>> {
    // Only the user pattern is a glob; the root is matched literally.
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&escaped_root).join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let entries = glob::glob(&pattern_str).map_err(|e| {
        AocError::ConfigError(format!("Invalid discovery pattern '{pattern}': {e}"))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => match path.strip_prefix(root) {
                Ok(relative) => files.push(relative.to_string_lossy().replace('\\', "/")),
                Err(_) => tracing::debug!(path = %path.display(), "match outside workspace root"),
            },
            Ok(path) => tracing::trace!(path = %path.display(), "ignoring non-file match"),
            Err(e) => tracing::debug!(error = %e, "unreadable path during discovery"),
        }
    }

    files.sort();
    tracing::debug!(count = files.len(), pattern, "discovered data files");
    Ok(files)
}
