use std::path::Path;
use std::process::Command;

use ssosync_bootstrap_core::contract::CommandOutcome;

use crate::handlers::sync::SyncRunner;

/// Runs the synchronization binary to completion with both streams fully
/// buffered. The child inherits the parent environment and working
/// directory; no arguments are passed and no timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSyncRunner;

impl SyncRunner for ProcessSyncRunner {
    fn run_sync(&self, command: &Path) -> Result<CommandOutcome, String> {
        let output = Command::new(command)
            .output()
            .map_err(|error| format!("failed to launch {}: {error}", command.display()))?;

        Ok(CommandOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
