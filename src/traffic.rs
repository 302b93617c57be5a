//! Time-of-day traffic heuristic.
//!
//! No upstream is involved; the estimate depends only on weekday and hour.

use crate::models::{TrafficInfo, TrafficLevel};
use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};

pub const TRAFFIC_NOTE: &str = "Estimated from local time of day; not based on live traffic data.";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Server wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Estimates congestion for the given moment.
///
/// Weekends: Moderate 11:00-20:59, otherwise Low.
/// Weekdays: High 08:00-10:59 and 17:00-20:59, Moderate 11:00-16:59, otherwise Low.
/// Hours outside those windows (early morning, late night) report Low.
pub fn estimate_traffic<T>(now: &T) -> TrafficInfo
where
    T: Datelike + Timelike,
{
    let hour = now.hour();
    let level = match now.weekday() {
        Weekday::Sat | Weekday::Sun => match hour {
            11..=20 => TrafficLevel::Moderate,
            _ => TrafficLevel::Low,
        },
        _ => match hour {
            8..=10 | 17..=20 => TrafficLevel::High,
            11..=16 => TrafficLevel::Moderate,
            _ => TrafficLevel::Low,
        },
    };

    TrafficInfo {
        level,
        note: TRAFFIC_NOTE.to_string(),
    }
}
