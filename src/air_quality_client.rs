use crate::classifiers::aqi_category;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::AirQualityInfo;
use crate::upstream::{endpoint, fetch_json, Upstream};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Client for the WAQI city feed.
#[derive(Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
    token: String,
}

/// WAQI wraps every answer in `{status, data}`; on failure `data` is a message string.
#[derive(Debug, Deserialize)]
struct WaqiEnvelope {
    status: String,
    #[serde(default)]
    data: Value,
}

impl AirQualityClient {
    pub fn new(client: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    pub fn from_config(client: &Client, config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(
            client.clone(),
            config.waqi_base_url.clone(),
            config.waqi_token()?,
        ))
    }

    /// Looks up the current AQI for `city` and labels it.
    pub async fn current(&self, city: &str) -> Result<AirQualityInfo, AppError> {
        let url = endpoint(Upstream::AirQuality, &self.base_url, &["feed", city, ""])?;
        tracing::info!("Fetching air quality for city: {}", city);
        tracing::debug!("WAQI URL: {}?token=[REDACTED]", url);

        let envelope: WaqiEnvelope = fetch_json(
            Upstream::AirQuality,
            self.client.get(url).query(&[("token", self.token.as_str())]),
        )
        .await?;

        let aqi = parse_envelope(envelope)?;
        Ok(AirQualityInfo {
            aqi,
            category: aqi_category(aqi),
        })
    }
}

fn parse_envelope(envelope: WaqiEnvelope) -> Result<i64, AppError> {
    if envelope.status != "ok" {
        let message = envelope
            .data
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("status {}", envelope.status));
        return Err(AppError::UpstreamRejected {
            upstream: Upstream::AirQuality,
            status: 200,
            message,
        });
    }

    // Stations without a current reading report "-".
    envelope
        .data
        .get("aqi")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::MalformedUpstreamPayload {
            upstream: Upstream::AirQuality,
            message: "aqi missing or not an integer".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> WaqiEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ok_envelope() {
        let aqi = parse_envelope(envelope(json!({"status": "ok", "data": {"aqi": 57}}))).unwrap();
        assert_eq!(aqi, 57);
    }

    #[test]
    fn test_error_envelope_is_rejected() {
        let err = parse_envelope(envelope(json!({"status": "error", "data": "Unknown station"})))
            .unwrap_err();
        match err {
            AppError::UpstreamRejected { status, message, .. } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Unknown station");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_dash_aqi_is_malformed() {
        let err = parse_envelope(envelope(json!({"status": "ok", "data": {"aqi": "-"}}))).unwrap_err();
        assert!(matches!(err, AppError::MalformedUpstreamPayload { .. }));
    }
}
