//! Data layer: response records.

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + 'a>>;

/// One HTTP response, before any redirect handling.
pub struct HttpResponse<E> {
    pub status: u16,
    /// Value of the `Location` header, if present and valid UTF-8.
    pub location: Option<String>,
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

impl<E> fmt::Debug for HttpResponse<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
