use std::future::Future;

use bytes::{Bytes, BytesMut};
use futures_util::TryStreamExt;
use tracing::debug;

use crate::data::HttpResponse;
use crate::error::FetchError;
use crate::net::{is_redirect, resolve_location};

/// Asynchronous HTTP client abstraction.
///
/// Implementations send exactly one GET and must not follow redirects
/// themselves; [`Fetcher`] does that.
pub trait HttpClient {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>>;
}

/// Downloads whole response bodies, chasing redirects.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// GET `url` and return its body.
    ///
    /// A 3xx response with a `Location` header restarts the request at that
    /// location. There is no hop limit. 200 returns the body; every other
    /// status is [`FetchError::HttpStatus`].
    pub async fn get(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut current = url.to_string();
        loop {
            debug!(url = %current, "GET");
            let response = self
                .client
                .get(&current)
                .await
                .map_err(|e| FetchError::network(&current, e))?;

            match response.status {
                200 => return self.collect(&current, response).await,
                status if is_redirect(status) => {
                    let Some(location) = response.location else {
                        return Err(FetchError::HttpStatus {
                            url: current,
                            status,
                        });
                    };
                    let next = resolve_location(&current, &location)?;
                    debug!(status, from = %current, to = %next, "redirect");
                    current = next;
                }
                status => {
                    return Err(FetchError::HttpStatus {
                        url: current,
                        status,
                    });
                }
            }
        }
    }

    async fn collect(
        &self,
        url: &str,
        response: HttpResponse<C::Error>,
    ) -> Result<Bytes, FetchError> {
        let mut body = response.body;
        let mut buffer = BytesMut::new();
        while let Some(chunk) = body
            .try_next()
            .await
            .map_err(|e| FetchError::network(url, e))?
        {
            buffer.extend_from_slice(&chunk);
        }
        debug!(url, bytes = buffer.len(), "downloaded");
        Ok(buffer.freeze())
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use super::*;
    use futures_util::StreamExt;
    use reqwest::{Client, header, redirect};

    /// Production HTTP client using `reqwest`, with its own redirect handling off.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = Client::builder()
                .user_agent(concat!("prebuilt/", env!("CARGO_PKG_VERSION")))
                .redirect(redirect::Policy::none())
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Ok(HttpResponse {
                status,
                location,
                body: response.bytes_stream().boxed_local(),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;
