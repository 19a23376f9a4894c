// Services module for discovery, task derivation and execution
pub mod discovery;
pub mod registry_merger;
pub mod scaffold;
pub mod task_deriver;
pub mod task_runner;
pub mod workspace;
