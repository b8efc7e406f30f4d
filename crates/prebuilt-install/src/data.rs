//! Data layer: records passed between pipeline stages.

use std::fmt;
use std::path::PathBuf;

use prebuilt_fetch::Codec;
use thiserror::Error;

use crate::error::ConfigError;

/// A GitHub repository, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Result of running the package's smoke test against the installed artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Passed,
    Failed,
    /// No script to run. Treated the same as `Failed`.
    Unavailable,
}

impl VerificationOutcome {
    pub fn passed(self) -> bool {
        self == Self::Passed
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Unavailable => "is unavailable",
        })
    }
}

/// Why the pipeline chose to build locally.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("configuration is incomplete: {0}")]
    Config(#[from] ConfigError),

    #[error("development mode")]
    Development,

    #[error("no repository or version to build an asset URL from")]
    NoAssetUrl,

    #[error("no prebuilt artifact could be downloaded")]
    NoArtifact,

    #[error("artifact verification {0}")]
    Verification(VerificationOutcome),
}

/// How a run that did not fail ended.
#[derive(Debug)]
pub enum Outcome {
    /// A downloaded artifact passed verification.
    Installed { codec: Codec, path: PathBuf },
    /// The local build ran and succeeded.
    BuiltLocally { reason: FallbackReason },
}
