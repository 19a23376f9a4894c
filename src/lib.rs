// aoc - puzzle workspace starter and task runner
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::puzzle_file::{PathShapeError, PuzzleFileRef};
pub use models::registry::TaskRegistry;
pub use models::task::{TaskAlias, TaskDefinition};
pub use services::registry_merger::merge;
pub use services::task_deriver::{
    aliases_for, CommandBuilder, DerivedTasks, ShellCommandBuilder, TaskDeriver,
};
