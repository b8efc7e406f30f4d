//! The local build every failed acquisition ends in.

use std::path::Path;

use prebuilt_platform::{Command, CommandRunner, OutputMode};
use tracing::info;

use crate::error::BuildError;

/// `npm run rebuild`, run in the package directory.
pub fn rebuild_command(working_dir: &Path) -> Command {
    Command::new("npm")
        .args(["run", "rebuild"])
        .current_dir(working_dir)
}

/// Build the artifact from source. Failure here is not recovered.
pub async fn build<R: CommandRunner>(working_dir: &Path, runner: &R) -> Result<(), BuildError> {
    let command = rebuild_command(working_dir);
    info!(%command, "building locally");

    let output = runner
        .run(&command, OutputMode::Inherit)
        .await
        .map_err(BuildError::Spawn)?;
    if output.success() {
        return Ok(());
    }
    Err(BuildError::Failed {
        cmd: command.to_string(),
        status: output.status(),
        code: output.code,
    })
}
