use std::time::Duration;

use reqwest::IntoUrl;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use snafu::ResultExt;

use crate::{RequestBuilder, Result, error::error::BuildSnafu};

/// A `reqwest` client with a tracing span around every outbound request.
///
/// Requests are never retried, each call to [`RequestBuilder::send`] results in exactly one
/// request on the wire.
#[derive(Debug, Clone)]
pub struct HttpClient(ClientWithMiddleware);

#[derive(Default, Debug)]
pub struct HttpClientBuilder {
    client: reqwest::ClientBuilder,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn get(&self, url: impl IntoUrl) -> RequestBuilder {
        RequestBuilder(self.0.get(url))
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    pub fn gzip(mut self, enable: bool) -> Self {
        self.client = self.client.gzip(enable);
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let inner = self.client.build().context(BuildSnafu)?;
        let client = ClientBuilder::new(inner)
            .with(TracingMiddleware::default())
            .build();

        Ok(HttpClient(client))
    }
}
