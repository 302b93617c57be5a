//! OpenAPI document for the JSON routes.

use crate::errors::ErrorBody;
use crate::models::{
    AirQualityInfo, AqiCategory, CitySuggestion, CompositeCityInfo, TrafficInfo, TrafficLevel,
    UvInfo, UvRisk, WeatherInfo,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "City Info API",
        description = "Weather, air quality, UV and traffic estimates for a city"
    ),
    paths(
        crate::handlers::weather,
        crate::handlers::city_info,
        crate::handlers::cities
    ),
    components(schemas(
        WeatherInfo,
        AirQualityInfo,
        AqiCategory,
        UvInfo,
        UvRisk,
        TrafficInfo,
        TrafficLevel,
        CitySuggestion,
        CompositeCityInfo,
        ErrorBody
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_json_routes() {
        let doc = ApiDoc::openapi();
        for route in ["/weather", "/city-info", "/cities"] {
            assert!(doc.paths.paths.contains_key(route), "missing {}", route);
        }
    }
}
