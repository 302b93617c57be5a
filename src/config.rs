use crate::errors::AppError;
use std::time::Duration;

pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const WAQI_TOKEN: &str = "WAQI_TOKEN";
pub const OPENUV_API_KEY: &str = "OPENUV_API_KEY";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_WAQI_BASE_URL: &str = "https://api.waqi.info";
const DEFAULT_OPENUV_BASE_URL: &str = "https://api.openuv.io";

/// Service configuration, built once at startup and shared through `AppState`.
///
/// Credentials are optional here: a missing key only fails the routes that
/// actually need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openweather_api_key: Option<String>,
    pub waqi_token: Option<String>,
    pub openuv_api_key: Option<String>,
    pub openweather_base_url: String,
    pub waqi_base_url: String,
    pub openuv_base_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("OpenWeather Base URL: {}", config.openweather_base_url);
        tracing::debug!("WAQI Base URL: {}", config.waqi_base_url);
        tracing::debug!("OpenUV Base URL: {}", config.openuv_base_url);
        tracing::debug!("Upstream timeout: {:?}", config.upstream_timeout);
        tracing::debug!("Server Port: {}", config.port);
        for name in config.missing_credentials() {
            tracing::warn!("{} is not set; routes that need it will return 500", name);
        }

        Ok(config)
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT")) {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        let upstream_timeout = match non_empty(lookup("UPSTREAM_TIMEOUT_SECS")) {
            Some(secs) => {
                let secs: u64 = secs.parse().map_err(|_| {
                    anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a positive integer")
                })?;
                if secs == 0 {
                    anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            port,
            openweather_api_key: non_empty(lookup(OPENWEATHER_API_KEY)),
            waqi_token: non_empty(lookup(WAQI_TOKEN)),
            openuv_api_key: non_empty(lookup(OPENUV_API_KEY)),
            openweather_base_url: base_url(
                "OPENWEATHER_BASE_URL",
                lookup("OPENWEATHER_BASE_URL"),
                DEFAULT_OPENWEATHER_BASE_URL,
            )?,
            waqi_base_url: base_url("WAQI_BASE_URL", lookup("WAQI_BASE_URL"), DEFAULT_WAQI_BASE_URL)?,
            openuv_base_url: base_url(
                "OPENUV_BASE_URL",
                lookup("OPENUV_BASE_URL"),
                DEFAULT_OPENUV_BASE_URL,
            )?,
            upstream_timeout,
        })
    }

    pub fn openweather_key(&self) -> Result<&str, AppError> {
        credential(&self.openweather_api_key, OPENWEATHER_API_KEY)
    }

    pub fn waqi_token(&self) -> Result<&str, AppError> {
        credential(&self.waqi_token, WAQI_TOKEN)
    }

    pub fn openuv_key(&self) -> Result<&str, AppError> {
        credential(&self.openuv_api_key, OPENUV_API_KEY)
    }

    /// Names of the credential variables that are unset.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            (OPENWEATHER_API_KEY, &self.openweather_api_key),
            (WAQI_TOKEN, &self.waqi_token),
            (OPENUV_API_KEY, &self.openuv_api_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn credential<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, AppError> {
    value.as_deref().ok_or(AppError::MissingCredential(name))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn base_url(name: &str, value: Option<String>, default: &str) -> anyhow::Result<String> {
    let url = match non_empty(value) {
        Some(url) => url,
        None => return Ok(default.to_string()),
    };
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    url::Url::parse(&url).map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", name, e))?;
    Ok(url.trim_end_matches('/').to_string())
}
