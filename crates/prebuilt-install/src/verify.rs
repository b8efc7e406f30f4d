//! Post-install smoke test of a downloaded artifact.

use std::collections::BTreeMap;

use prebuilt_platform::{Command, CommandRunner, OutputMode};
use tracing::{debug, info};

use crate::config::InstallConfig;
use crate::data::VerificationOutcome;

/// Script names consulted, in order of preference.
pub const SCRIPTS: [&str; 2] = ["verify-build", "test"];

/// The first declared verification script, if any.
pub fn select_script(scripts: &BTreeMap<String, String>) -> Option<&'static str> {
    SCRIPTS.into_iter().find(|name| scripts.contains_key(*name))
}

/// Run the package's verification script against the installed artifact.
///
/// Output is shown only in verbose mode. Anything but a clean zero exit,
/// including a script that cannot be started, counts as failure.
pub async fn verify<R: CommandRunner>(config: &InstallConfig, runner: &R) -> VerificationOutcome {
    let Some(script) = select_script(&config.scripts) else {
        info!("no verify-build or test script, cannot check the downloaded artifact");
        return VerificationOutcome::Unavailable;
    };

    let command = Command::new("npm")
        .args(["run", script])
        .current_dir(&config.working_dir);
    info!(script, "checking the downloaded artifact");

    match runner.run(&command, OutputMode::forwarded(config.verbose)).await {
        Ok(output) if output.success() => VerificationOutcome::Passed,
        Ok(output) => {
            info!(script, status = %output.status(), "the downloaded artifact did not pass");
            VerificationOutcome::Failed
        }
        Err(e) => {
            debug!(error = %e, "verification could not start");
            VerificationOutcome::Failed
        }
    }
}
