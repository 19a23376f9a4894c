use crate::models::registry::TaskRegistry;
use crate::services::task_deriver::{CommandBuilder, TaskDeriver};

/// Build the workspace task registry from a discovery pass.
///
/// Files are derived in order; a file whose path does not have the puzzle
/// shape is reported and skipped without affecting the others. When two files
/// produce the same alias the later one wins.
pub fn merge<B, S>(deriver: &TaskDeriver<B>, files: &[S]) -> TaskRegistry
where
    B: CommandBuilder,
    S: AsRef<str>,
{
    files
        .iter()
        .map(AsRef::as_ref)
        .fold(TaskRegistry::new(), |registry, file| {
            match deriver.derive(file) {
                Ok(derived) => {
                    tracing::trace!(
                        file,
                        puzzle = %derived.file,
                        aliases = derived.tasks.len(),
                        "derived tasks"
                    );
                    registry.merged(derived.tasks)
                }
                Err(err) => {
                    tracing::warn!(file, error = %err, "skipping data file");
                    registry
                }
            }
        })
}
