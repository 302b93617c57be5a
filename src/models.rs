use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============ Query Parameters ============

/// Query parameters for `/weather` and `/city-info`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQueryParams {
    /// City name, e.g. `London` or `São Paulo`.
    pub city: Option<String>,
}

/// Query parameters for `/cities`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CitySearchParams {
    /// Free-text search term.
    pub q: Option<String>,
}

// ============ Response DTOs ============

/// Current weather for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherInfo {
    pub city: String,
    /// ISO 3166 country code.
    pub country: String,
    /// Temperature in °C.
    pub temp: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: u32,
    /// Textual description of the first reported condition.
    pub condition: String,
}

/// Latitude/longitude pair reported by the weather provider.
///
/// Only used to chain the UV lookup; never serialized to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Weather lookup result: the public DTO plus the coordinates it resolved to.
///
/// `coordinates` is `None` when the provider omitted `coord`; only the UV
/// lookup needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub info: WeatherInfo,
    pub coordinates: Option<Coordinates>,
}

/// Six-bucket AQI scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

/// Air quality for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirQualityInfo {
    pub aqi: i64,
    pub category: AqiCategory,
}

/// Five-bucket UV exposure scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum UvRisk {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Extreme,
}

impl UvRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            UvRisk::Low => "Low",
            UvRisk::Moderate => "Moderate",
            UvRisk::High => "High",
            UvRisk::VeryHigh => "Very High",
            UvRisk::Extreme => "Extreme",
        }
    }
}

/// UV index at the city's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UvInfo {
    pub index: f64,
    pub risk: UvRisk,
}

/// Coarse congestion estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum TrafficLevel {
    Low,
    Moderate,
    High,
}

/// Time-of-day traffic heuristic. Not live data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrafficInfo {
    pub level: TrafficLevel,
    pub note: String,
}

/// One geocoding match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CitySuggestion {
    pub name: String,
    pub country: String,
}

/// Full fan-out response for `/city-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompositeCityInfo {
    pub city: String,
    pub country: String,
    pub weather: WeatherInfo,
    pub air_quality: AirQualityInfo,
    pub uv: UvInfo,
    pub traffic: TrafficInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_as_display_strings() {
        assert_eq!(
            serde_json::to_value(AqiCategory::UnhealthyForSensitiveGroups).unwrap(),
            serde_json::json!("Unhealthy for Sensitive Groups")
        );
        assert_eq!(
            serde_json::to_value(UvRisk::VeryHigh).unwrap(),
            serde_json::json!("Very High")
        );
        assert_eq!(
            serde_json::to_value(TrafficLevel::Moderate).unwrap(),
            serde_json::json!("Moderate")
        );
    }

    #[test]
    fn test_as_str_matches_serialized_label() {
        for category in [
            AqiCategory::Good,
            AqiCategory::Moderate,
            AqiCategory::UnhealthyForSensitiveGroups,
            AqiCategory::Unhealthy,
            AqiCategory::VeryUnhealthy,
            AqiCategory::Hazardous,
        ] {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                serde_json::json!(category.as_str())
            );
        }
    }
}
