//! Asset URL construction.

use prebuilt_fetch::Codec;
use prebuilt_platform::PlatformTag;

use crate::config::InstallConfig;
use crate::data::RepositoryRef;

/// Public release host used when no mirror is configured.
pub const DEFAULT_HOST: &str = "https://github.com";

/// Pick the release host: explicit override, then the mirror variable, then github.
pub fn resolve_host(host_override: Option<&str>, env_value: Option<&str>) -> String {
    let host = [host_override, env_value]
        .into_iter()
        .flatten()
        .find(|h| !h.is_empty())
        .unwrap_or(DEFAULT_HOST);
    host.strip_suffix('/').unwrap_or(host).to_string()
}

/// The extension-less asset URL, or `None` when the repository or version is unknown.
pub fn build(
    config: &InstallConfig,
    platform: PlatformTag,
    arch: &str,
    abi: &str,
) -> Option<String> {
    AssetRequest::new(config, platform, arch, abi).map(|request| request.url())
}

/// Everything that goes into an asset URL, fixed before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub host: String,
    pub repository: RepositoryRef,
    pub version: String,
    pub prefix: String,
    pub suffix: String,
    pub platform: PlatformTag,
    pub arch: String,
    pub abi: String,
}

impl AssetRequest {
    /// Assemble a request, or `None` when the repository or version is unknown.
    pub fn new(
        config: &InstallConfig,
        platform: PlatformTag,
        arch: impl Into<String>,
        abi: impl Into<String>,
    ) -> Option<Self> {
        let repository = config.repository.clone()?;
        let version = config.version.clone()?;
        Some(Self {
            host: config.host.clone(),
            repository,
            version,
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            platform,
            arch: arch.into(),
            abi: abi.into(),
        })
    }

    /// `{prefix}{platform}-{arch}-{abi}{suffix}`
    pub fn file_name(&self) -> String {
        format!(
            "{}{}-{}-{}{}",
            self.prefix, self.platform, self.arch, self.abi, self.suffix
        )
    }

    /// `{host}/{owner}/{name}/releases/download/{version}/{file}`, without codec extension.
    pub fn url(&self) -> String {
        format!(
            "{}/{}/{}/releases/download/{}/{}",
            self.host,
            self.repository.owner,
            self.repository.name,
            self.version,
            self.file_name()
        )
    }

    pub fn url_for(&self, codec: Codec) -> String {
        format!("{}{}", self.url(), codec.extension())
    }
}
