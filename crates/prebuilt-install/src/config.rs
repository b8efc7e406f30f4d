//! Run-scoped configuration.
//!
//! Everything the pipeline knows about its inputs is gathered here once, from
//! the command line ([`Settings`]), a snapshot of the environment
//! ([`EnvSnapshot`]) and the package manifest. The resulting [`InstallConfig`]
//! is never mutated afterwards.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::asset;
use crate::data::RepositoryRef;
use crate::error::ConfigError;
use crate::manifest::Manifest;
use crate::repo;

/// Default name of the environment variable that carries a mirror host.
pub const DEFAULT_HOST_VAR: &str = "DOWNLOAD_HOST";

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Raw inputs, as given on the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub artifact: Option<PathBuf>,
    pub prefix: String,
    pub suffix: String,
    pub host: Option<String>,
    pub host_var: String,
    pub manifest: PathBuf,
    pub abi: Option<String>,
    pub arch: Option<String>,
    pub verbose: bool,
    pub working_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artifact: None,
            prefix: String::new(),
            suffix: String::new(),
            host: None,
            host_var: DEFAULT_HOST_VAR.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            abi: None,
            arch: None,
            verbose: false,
            working_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    pub fn manifest_path(&self) -> PathBuf {
        self.working_dir.join(&self.manifest)
    }
}

/// An immutable copy of the process environment, taken once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Value of `name`, with empty values treated as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Resolved configuration shared by every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub artifact: PathBuf,
    pub prefix: String,
    pub suffix: String,
    /// Release host with no trailing slash.
    pub host: String,
    pub repository: Option<RepositoryRef>,
    pub version: Option<String>,
    pub scripts: BTreeMap<String, String>,
    /// ABI override; probed from the runtime when absent.
    pub abi: Option<String>,
    /// Architecture override; probed from the runtime when absent.
    pub arch: Option<String>,
    pub verbose: bool,
    pub working_dir: PathBuf,
}

impl InstallConfig {
    pub fn resolve(settings: &Settings, env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let manifest = Manifest::load(&settings.manifest_path())?;
        Self::from_manifest(settings, env, manifest)
    }

    pub fn from_manifest(
        settings: &Settings,
        env: &EnvSnapshot,
        manifest: Manifest,
    ) -> Result<Self, ConfigError> {
        let artifact = settings
            .artifact
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingArtifact)?;

        let repository = manifest.repository_location().and_then(repo::parse);
        let host = asset::resolve_host(settings.host.as_deref(), env.get(&settings.host_var));
        debug!(?repository, %host, "configuration resolved");

        Ok(Self {
            artifact: absolutize(&settings.working_dir, artifact),
            prefix: settings.prefix.clone(),
            suffix: settings.suffix.clone(),
            host,
            repository,
            version: manifest.version.filter(|v| !v.is_empty()),
            scripts: manifest.scripts,
            abi: settings.abi.clone().filter(|v| !v.is_empty()),
            arch: settings.arch.clone().filter(|v| !v.is_empty()),
            verbose: settings.verbose,
            working_dir: settings.working_dir.clone(),
        })
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
