/// Unit tests for the labelling rules
/// Tests AQI categories, UV risk and the traffic estimate at their documented boundaries
use chrono::{NaiveDate, NaiveDateTime};
use city_info_api::classifiers::{aqi_category, uv_risk};
use city_info_api::models::{AqiCategory, TrafficLevel, UvRisk};
use city_info_api::traffic::estimate_traffic;

#[cfg(test)]
mod aqi_category_tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(aqi_category(50).as_str(), "Good");
        assert_eq!(aqi_category(51).as_str(), "Moderate");
        assert_eq!(aqi_category(301).as_str(), "Hazardous");
    }

    #[test]
    fn test_every_bucket() {
        let cases = [
            (50, AqiCategory::Good),
            (100, AqiCategory::Moderate),
            (150, AqiCategory::UnhealthyForSensitiveGroups),
            (200, AqiCategory::Unhealthy),
            (300, AqiCategory::VeryUnhealthy),
            (500, AqiCategory::Hazardous),
        ];
        for (aqi, expected) in cases {
            assert_eq!(aqi_category(aqi), expected, "aqi {}", aqi);
        }
    }
}

#[cfg(test)]
mod uv_risk_tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(uv_risk(2.9).as_str(), "Low");
        assert_eq!(uv_risk(3.0).as_str(), "Moderate");
        assert_eq!(uv_risk(11.0).as_str(), "Extreme");
    }

    #[test]
    fn test_every_bucket() {
        assert_eq!(uv_risk(0.0), UvRisk::Low);
        assert_eq!(uv_risk(5.0), UvRisk::Moderate);
        assert_eq!(uv_risk(7.9), UvRisk::High);
        assert_eq!(uv_risk(10.0), UvRisk::VeryHigh);
        assert_eq!(uv_risk(14.5), UvRisk::Extreme);
    }
}

#[cfg(test)]
mod traffic_tests {
    use super::*;

    fn moment(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_saturday() {
        // 2025-03-15 is a Saturday
        assert_eq!(estimate_traffic(&moment(2025, 3, 15, 14)).level, TrafficLevel::Moderate);
        assert_eq!(estimate_traffic(&moment(2025, 3, 15, 21)).level, TrafficLevel::Low);
    }

    #[test]
    fn test_tuesday() {
        // 2025-03-18 is a Tuesday
        assert_eq!(estimate_traffic(&moment(2025, 3, 18, 9)).level, TrafficLevel::High);
        assert_eq!(estimate_traffic(&moment(2025, 3, 18, 12)).level, TrafficLevel::Moderate);
        assert_eq!(estimate_traffic(&moment(2025, 3, 18, 7)).level, TrafficLevel::Low);
    }
}
