//! HTTP retrieval and decompression of prebuilt artifacts.
//!
//! # Architecture
//!
//! - [`data`] - response records
//! - [`net`] - pure helpers (redirect detection, location resolution)
//! - [`effects`] - the [`HttpClient`] seam and the redirect-following [`Fetcher`]
//! - [`codec`] - the ordered set of compression codecs
//! - [`write_artifact`] - atomic placement of the result
//!
//! Redirects are always chased by [`Fetcher`], never by the transport, so a
//! fake client in tests sees every hop.

pub mod codec;
pub mod data;
pub mod effects;
mod error;
pub mod net;
mod place;

pub use codec::Codec;
pub use net::{is_redirect, resolve_location};
pub use data::{BoxStream, HttpResponse};
pub use effects::{Fetcher, HttpClient};
pub use error::{DecodeError, FetchError, WriteError};
pub use place::write_artifact;

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;
