//! Pipeline - the acquisition state machine.
//!
//! Every stage either advances or jumps to [`Stage::Fallback`]. The two
//! terminal stages are [`Stage::Done`] (a verified download) and
//! [`Stage::Fallback`], which runs the local build exactly once.

use std::collections::VecDeque;
use std::path::PathBuf;

use prebuilt_fetch::{Codec, DecodeError, FetchError, Fetcher, HttpClient, WriteError};
use prebuilt_platform::{CommandRunner, abi, arch, os};
use thiserror::Error;
use tracing::{debug, info};

use crate::asset::AssetRequest;
use crate::config::{EnvSnapshot, InstallConfig, Settings};
use crate::data::{FallbackReason, Outcome};
use crate::error::{BuildError, ConfigError};
use crate::{dev, fallback, verify};

/// A state of the acquisition pipeline.
#[derive(Debug)]
pub(crate) enum Stage {
    Init,
    ConfigResolve,
    DevCheck(InstallConfig),
    UrlResolve(InstallConfig),
    /// Try the next codec in `codecs`; an empty queue means nothing worked.
    TryCodec {
        config: InstallConfig,
        request: AssetRequest,
        codecs: VecDeque<Codec>,
    },
    Verify {
        config: InstallConfig,
        codec: Codec,
    },
    Done {
        codec: Codec,
        path: PathBuf,
    },
    Fallback(FallbackReason),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ConfigResolve => "config-resolve",
            Self::DevCheck(_) => "dev-check",
            Self::UrlResolve(_) => "url-resolve",
            Self::TryCodec { .. } => "try-codec",
            Self::Verify { .. } => "verify",
            Self::Done { .. } => "done",
            Self::Fallback(_) => "fallback",
        }
    }
}

/// Why a single codec attempt did not produce an artifact.
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Drives one install run against an HTTP client and a command runner.
pub struct Pipeline<C: HttpClient, R: CommandRunner> {
    fetcher: Fetcher<C>,
    runner: R,
}

impl<C: HttpClient, R: CommandRunner> Pipeline<C, R> {
    pub fn new(client: C, runner: R) -> Self {
        Self {
            fetcher: Fetcher::new(client),
            runner,
        }
    }

    pub fn client(&self) -> &C {
        self.fetcher.client()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Only when the local build was needed and failed.
    pub async fn run(&self, settings: &Settings, env: &EnvSnapshot) -> Result<Outcome, BuildError> {
        let mut stage = Stage::Init;
        loop {
            debug!(stage = stage.name(), "entering stage");
            stage = match stage {
                Stage::Done { codec, path } => {
                    info!(%codec, path = %path.display(), "done");
                    return Ok(Outcome::Installed { codec, path });
                }
                Stage::Fallback(reason) => {
                    info!(%reason, "building locally");
                    fallback::build(&settings.working_dir, &self.runner).await?;
                    return Ok(Outcome::BuiltLocally { reason });
                }
                stage => self.step(stage, settings, env).await,
            };
        }
    }

    async fn step(&self, stage: Stage, settings: &Settings, env: &EnvSnapshot) -> Stage {
        match stage {
            Stage::Init => Stage::ConfigResolve,
            Stage::ConfigResolve => match InstallConfig::resolve(settings, env) {
                Ok(config) => Stage::DevCheck(config),
                Err(e) => Stage::Fallback(e.into()),
            },
            Stage::DevCheck(config) => {
                if dev::is_development(env, &config.working_dir) {
                    Stage::Fallback(FallbackReason::Development)
                } else {
                    Stage::UrlResolve(config)
                }
            }
            Stage::UrlResolve(config) => self.resolve_url(config).await,
            Stage::TryCodec {
                config,
                request,
                mut codecs,
            } => {
                let Some(codec) = codecs.pop_front() else {
                    return Stage::Fallback(FallbackReason::NoArtifact);
                };
                match self.attempt(&config, &request, codec).await {
                    Ok(()) => Stage::Verify { config, codec },
                    Err(e) => {
                        debug!(%codec, error = %e, "codec attempt failed");
                        Stage::TryCodec {
                            config,
                            request,
                            codecs,
                        }
                    }
                }
            }
            Stage::Verify { config, codec } => {
                let outcome = verify::verify(&config, &self.runner).await;
                if outcome.passed() {
                    Stage::Done {
                        codec,
                        path: config.artifact,
                    }
                } else {
                    Stage::Fallback(FallbackReason::Verification(outcome))
                }
            }
            terminal @ (Stage::Done { .. } | Stage::Fallback(_)) => terminal,
        }
    }

    async fn resolve_url(&self, config: InstallConfig) -> Stage {
        if config.repository.is_none() || config.version.is_none() {
            return Stage::Fallback(FallbackReason::NoAssetUrl);
        }

        let platform = os::detect(&self.runner).await;
        let arch = match &config.arch {
            Some(arch) => arch.clone(),
            None => arch::from_runtime(&self.runner).await,
        };
        let abi = match &config.abi {
            Some(abi) => abi.clone(),
            None => match abi::detect(&self.runner).await {
                Ok(abi) => abi,
                Err(e) => return Stage::Fallback(ConfigError::AbiUnavailable(e).into()),
            },
        };

        let Some(request) = AssetRequest::new(&config, platform, arch, abi) else {
            return Stage::Fallback(FallbackReason::NoAssetUrl);
        };
        debug!(url = %request.url(), "asset resolved");
        Stage::TryCodec {
            config,
            request,
            codecs: Codec::available().collect(),
        }
    }

    /// Download, decompress and place the artifact for one codec.
    async fn attempt(
        &self,
        config: &InstallConfig,
        request: &AssetRequest,
        codec: Codec,
    ) -> Result<(), AttemptError> {
        let url = request.url_for(codec);
        info!(%url, "trying");
        let compressed = self.fetcher.get(&url).await?;
        let artifact = codec.decompress(&compressed)?;
        prebuilt_fetch::write_artifact(&config.artifact, &artifact).await?;
        Ok(())
    }
}
