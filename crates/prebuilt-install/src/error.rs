//! Error types for prebuilt-install.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems. Every variant ends in a local build, never a crash.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no artifact path given")]
    MissingArtifact,

    #[error("cannot determine the runtime ABI version: {0}")]
    AbiUnavailable(#[source] prebuilt_platform::Error),
}

/// The local build failed. This is the only unrecoverable outcome.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("local build could not start: {0}")]
    Spawn(#[source] prebuilt_platform::Error),

    #[error("local build `{cmd}` failed with {status}")]
    Failed {
        cmd: String,
        status: String,
        code: Option<i32>,
    },
}

impl BuildError {
    /// Exit code to terminate with: the build's own code when it had one.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
