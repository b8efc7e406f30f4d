//! Error types for prebuilt-fetch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::codec::Codec;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    pub fn network<E>(url: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// The status code of an unexpected HTTP response, if that was the failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0} support is not compiled in")]
    Unsupported(Codec),

    #[error("{codec} stream is corrupt: {source}")]
    Corrupt {
        codec: Codec,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
