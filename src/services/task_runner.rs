use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::models::task::TaskDefinition;
use crate::utils::error::Result;

/// Run a task's command through the platform shell in `workdir`.
///
/// Output is streamed straight to the terminal. Returns the child's exit
/// code, or `-1` when it was terminated by a signal.
pub async fn run_task(task: &TaskDefinition, args: &[String], workdir: &Path) -> Result<i32> {
    let full_command = task.command_with_args(args);

    let mut command = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", full_command.as_str()]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", full_command.as_str()]);
        cmd
    };

    tracing::info!(command = %full_command, workdir = %workdir.display(), "running task");

    let status = command
        .current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;

    let exit_code = status.code().unwrap_or(-1);
    tracing::debug!(exit_code, "task finished");
    Ok(exit_code)
}
