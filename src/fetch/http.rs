//! HTTP access for checks.
//!
//! Provides a blocking client for probing file URLs with `HEAD` and for
//! downloading documentation with `GET`.

use anyhow::{bail, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking HTTP/HTTPS client with a fixed timeout.
pub struct HttpFetcher {
    client: Client,
}

/// Response body of a successful `GET`.
#[derive(Debug)]
pub struct FetchResponse {
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// `Content-Type` header if present.
    pub content_type: Option<String>,
}

impl FetchResponse {
    /// Whether the server declared a PDF body.
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/pdf"))
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the given timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gplint/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Send a `HEAD` request and return the final status code.
    pub fn head(&self, url: &str) -> std::result::Result<u16, reqwest::Error> {
        tracing::debug!("HEAD {}", url);
        let response = self.client.head(url).send()?;
        Ok(response.status().as_u16())
    }

    /// Fetch a URL, failing on transport errors and non-success statuses.
    pub fn get(&self, url: &str) -> Result<FetchResponse> {
        tracing::debug!("GET {}", url);
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => bail!("Timeout while accessing URL: {}", url),
            Err(e) if e.is_connect() => bail!("Failed to connect to URL: {}", url),
            Err(e) => bail!("Failed to retrieve URL content: {}", e),
        };

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP error accessing URL: {} for url: {}", status, url);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if e.is_timeout() => bail!("Timeout while accessing URL: {}", url),
            Err(e) => bail!("Failed to retrieve URL content: {}", e),
        };

        Ok(FetchResponse { body, content_type })
    }
}
