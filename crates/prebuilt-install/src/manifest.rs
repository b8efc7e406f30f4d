//! Reading the package manifest (`package.json`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// The manifest fields the pipeline consumes. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

/// `"repository"` is either a bare string or `{ "type": "git", "url": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Shorthand(String),
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
}

impl Repository {
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Shorthand(location) => Some(location.as_str()),
            Self::Detailed { url } => url.as_deref(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn repository_location(&self) -> Option<&str> {
        self.repository.as_ref().and_then(Repository::location)
    }
}
