//! Acquisition-and-fallback pipeline for prebuilt native artifacts.
//!
//! [`Pipeline::run`] resolves the configuration, skips straight to a local
//! build in development checkouts, downloads the asset for this platform
//! (brotli first, then gzip), verifies it with the package's own script, and
//! falls back to `npm run rebuild` whenever any of that does not work out.
//! Only a failing local build is reported as an error.

pub mod asset;
pub mod config;
mod data;
pub mod dev;
mod error;
pub mod fallback;
pub mod manifest;
mod pipeline;
pub mod repo;
pub mod verify;

pub use asset::AssetRequest;
pub use config::{EnvSnapshot, InstallConfig, Settings};
pub use data::{FallbackReason, Outcome, RepositoryRef, VerificationOutcome};
pub use error::{BuildError, ConfigError};
pub use manifest::Manifest;
pub use pipeline::Pipeline;
