//! Shared plumbing for the upstream provider clients.
//!
//! Every client sends exactly one request per call and funnels the response
//! through [`fetch_json`], so transport errors, bad statuses and decode
//! failures map to the same `AppError` kinds everywhere.

use crate::errors::AppError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

const USER_AGENT: &str = concat!("city-info-api/", env!("CARGO_PKG_VERSION"));

/// Upstream error bodies longer than this are cut before they reach the logs.
const MAX_ERROR_TEXT_BYTES: usize = 512;

/// The third-party services this gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Weather,
    Geocoding,
    AirQuality,
    Uv,
}

impl Upstream {
    /// Short noun used in caller-facing messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Upstream::Weather => "weather",
            Upstream::Geocoding => "city search",
            Upstream::AirQuality => "air quality",
            Upstream::Uv => "UV",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Upstream::Weather => "OpenWeather",
            Upstream::Geocoding => "OpenWeather Geocoding",
            Upstream::AirQuality => "WAQI",
            Upstream::Uv => "OpenUV",
        };
        f.write_str(name)
    }
}

/// Builds the outbound HTTP client shared by all upstream clients.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Sends `request` and decodes a JSON body of type `T`.
pub(crate) async fn fetch_json<T>(upstream: Upstream, request: RequestBuilder) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    // Query strings carry credentials, so URLs never leave this function.
    let response = request
        .send()
        .await
        .map_err(|e| AppError::UpstreamUnreachable {
            upstream,
            message: e.without_url().to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamRejected {
            upstream,
            status: status.as_u16(),
            message: truncate_error_text(error_text),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::UpstreamUnreachable {
            upstream,
            message: e.without_url().to_string(),
        })?;

    serde_json::from_slice(&body).map_err(|e| AppError::MalformedUpstreamPayload {
        upstream,
        message: e.to_string(),
    })
}

/// Cuts `text` to at most `MAX_ERROR_TEXT_BYTES`, on a char boundary.
fn truncate_error_text(mut text: String) -> String {
    if text.len() <= MAX_ERROR_TEXT_BYTES {
        return text;
    }
    let mut end = MAX_ERROR_TEXT_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text.push_str("...");
    text
}

/// Joins `segments` onto `base`, percent-encoding each one.
pub(crate) fn endpoint(upstream: Upstream, base: &str, segments: &[&str]) -> Result<url::Url, AppError> {
    let invalid = |message: String| AppError::UpstreamUnreachable { upstream, message };

    let mut url = url::Url::parse(base).map_err(|e| invalid(format!("invalid base URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| invalid("base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = endpoint(
            Upstream::AirQuality,
            "https://api.waqi.info",
            &["feed", "São Paulo/Centro", ""],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.waqi.info/feed/S%C3%A3o%20Paulo%2FCentro/"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint(Upstream::Uv, "http://127.0.0.1:4000/proxy", &["api", "v1", "uv"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4000/proxy/api/v1/uv");
    }

    #[test]
    fn test_error_text_is_truncated() {
        assert_eq!(truncate_error_text("Not found".to_string()), "Not found");

        let long = "é".repeat(600);
        let cut = truncate_error_text(long);
        assert!(cut.len() <= MAX_ERROR_TEXT_BYTES + 3);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with("éé"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Upstream::AirQuality.to_string(), "WAQI");
        assert_eq!(Upstream::Uv.subject(), "UV");
    }
}
