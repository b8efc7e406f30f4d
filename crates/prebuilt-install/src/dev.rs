//! Development checkout detection.

use std::path::Path;

use crate::config::EnvSnapshot;

/// Setting this variable to any non-empty value skips acquisition.
pub const SKIP_VAR: &str = "DEVELOPMENT_SKIP_GETTING_ASSET";

/// A file with this name in the working directory skips acquisition.
pub const MARKER_FILE: &str = ".development";

/// Whether to go straight to the local build without touching the network.
pub fn is_development(env: &EnvSnapshot, working_dir: &Path) -> bool {
    env.get(SKIP_VAR).is_some() || working_dir.join(MARKER_FILE).exists()
}
