//! HTTP retrieval of a feed body.
//!
//! One shot per invocation, no retries: a one-shot converter reports the
//! failure and exits rather than backing off. The URL is validated before
//! any request is made.

use std::time::Duration;

use futures::StreamExt;
use thiserror::Error;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching a feed over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the 30-second timeout.
    #[error("Request timed out")]
    Timeout,
    /// HTTP response with non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the 10MB size limit.
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response body was not valid UTF-8 text.
    #[error("Feed body is not valid UTF-8")]
    InvalidEncoding,
}

/// Whether `input` should be treated as a remote feed URL rather than a
/// local file path.
pub fn is_remote(input: &str) -> bool {
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Parses and validates a feed URL: parseable, scheme http or https.
///
/// Anything else fails before a request is made.
pub fn validate_feed_url(url_str: &str) -> Result<Url, FetchError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FetchError::UnsupportedScheme(scheme.to_owned())),
    }
}

/// Fetches a feed body as text.
///
/// Validates the URL, issues one GET with a 30-second timeout, rejects
/// non-2xx statuses and bodies over 10MB, and decodes the body as UTF-8.
pub async fn fetch_feed(client: &reqwest::Client, url_str: &str) -> Result<String, FetchError> {
    let url = validate_feed_url(url_str)?;

    let response = tokio::time::timeout(FETCH_TIMEOUT, client.get(url.clone()).send())
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_FEED_SIZE).await?;
    tracing::debug!(url = %url, bytes = bytes.len(), "Fetched feed");

    String::from_utf8(bytes).map_err(|_| FetchError::InvalidEncoding)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length before touching the body
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
