//! Risk labels for numeric indices.

use crate::models::{AqiCategory, UvRisk};

/// Maps an AQI reading to its category. Upper bounds are inclusive.
///
/// Negative readings land in `Good`.
pub fn aqi_category(aqi: i64) -> AqiCategory {
    match aqi {
        i64::MIN..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        _ => AqiCategory::Hazardous,
    }
}

/// Maps a UV index to its exposure risk. Upper bounds are exclusive.
///
/// NaN compares false against every bound and so reports `Extreme`.
pub fn uv_risk(index: f64) -> UvRisk {
    if index < 3.0 {
        UvRisk::Low
    } else if index < 6.0 {
        UvRisk::Moderate
    } else if index < 8.0 {
        UvRisk::High
    } else if index < 11.0 {
        UvRisk::VeryHigh
    } else {
        UvRisk::Extreme
    }
}
