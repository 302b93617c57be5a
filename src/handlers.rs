use crate::aggregation::CityInfoService;
use crate::air_quality_client::AirQualityClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::geocoding_client::GeocodingClient;
use crate::models::*;
use crate::traffic::Clock;
use crate::uv_client::UvClient;
use crate::weather_client::WeatherClient;
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

pub const BANNER: &str = "DailyWeather API running. Use /weather?city=CityName";

/// Shared application state injected into handlers.
///
/// Nothing in here is mutated after startup; requests share no data.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Outbound HTTP client, reused by every upstream client.
    pub http_client: reqwest::Client,
    /// Time source for the traffic estimate.
    pub clock: Arc<dyn Clock>,
}

/// Returns the trimmed parameter value, or `MissingParameter` when absent or blank.
fn required_param(value: Option<String>, name: &'static str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingParameter(name))
}

/// GET /
pub async fn root() -> &'static str {
    BANNER
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// GET /weather
///
/// Current weather for one city. Only the weather upstream is called.
#[utoipa::path(
    get,
    path = "/weather",
    params(CityQueryParams),
    responses(
        (status = 200, description = "Current weather", body = WeatherInfo),
        (status = 400, description = "Missing city or city rejected upstream", body = ErrorBody),
        (status = 500, description = "Missing credential or upstream fault", body = ErrorBody)
    )
)]
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CityQueryParams>,
) -> Result<Json<WeatherInfo>, AppError> {
    let client = WeatherClient::from_config(&state.http_client, &state.config)?;
    let city = required_param(params.city, "city")?;
    tracing::info!("GET /weather - city: {}", city);

    let weather = client.current(&city).await?;
    Ok(Json(weather.info))
}

/// GET /city-info
///
/// Weather, air quality, UV and traffic for one city in a single response.
/// Any upstream failure fails the whole request.
#[utoipa::path(
    get,
    path = "/city-info",
    params(CityQueryParams),
    responses(
        (status = 200, description = "Composite city information", body = CompositeCityInfo),
        (status = 400, description = "Missing city or city rejected upstream", body = ErrorBody),
        (status = 500, description = "Missing credential or upstream fault", body = ErrorBody)
    )
)]
pub async fn city_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CityQueryParams>,
) -> Result<Json<CompositeCityInfo>, AppError> {
    let weather = WeatherClient::from_config(&state.http_client, &state.config)?;
    let air_quality = AirQualityClient::from_config(&state.http_client, &state.config)?;
    let uv = UvClient::from_config(&state.http_client, &state.config)?;
    let city = required_param(params.city, "city")?;
    tracing::info!("GET /city-info - city: {}", city);

    let service = CityInfoService::new(weather, air_quality, uv, state.clock.as_ref());
    let info = service.lookup(&city).await?;
    Ok(Json(info))
}

/// GET /cities
///
/// City search. Zero matches is a 200 with an empty array.
#[utoipa::path(
    get,
    path = "/cities",
    params(CitySearchParams),
    responses(
        (status = 200, description = "Matching cities, possibly none", body = [CitySuggestion]),
        (status = 400, description = "Missing q", body = ErrorBody),
        (status = 500, description = "Missing credential or upstream fault", body = ErrorBody)
    )
)]
pub async fn cities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CitySearchParams>,
) -> Result<Json<Vec<CitySuggestion>>, AppError> {
    let client = GeocodingClient::from_config(&state.http_client, &state.config)?;
    let query = required_param(params.q, "q")?;
    tracing::info!("GET /cities - q: {}", query);

    let suggestions = client.search(&query).await?;
    Ok(Json(suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_param() {
        assert_eq!(
            required_param(Some("  Paris ".to_string()), "city").unwrap(),
            "Paris"
        );
        assert!(matches!(
            required_param(Some("   ".to_string()), "city"),
            Err(AppError::MissingParameter("city"))
        ));
        assert!(matches!(
            required_param(None, "q"),
            Err(AppError::MissingParameter("q"))
        ));
    }
}
