// Models module for data structures
pub mod puzzle_file;
pub mod registry;
pub mod task;
pub mod workspace;
