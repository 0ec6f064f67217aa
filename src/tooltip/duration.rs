use serde::{Deserialize, Serialize};
use std::fmt;

use super::work_time::WorkTime;
use crate::error::TooltipError;

const MINUTE_MS: f64 = 60_000.0;
const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 86_400_000.0;

/// Spans below this are shown in minutes.
pub const SEVEN_HOURS_MS: f64 = 25_200_000.0;
/// Spans below this (and at least seven hours) are shown in hours.
pub const TWO_DAYS_MS: f64 = 172_800_000.0;

/// Display unit of a duration. `Day` is capitalised on the wire, the others are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "Day")]
    Day,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Minute => "min",
            DurationUnit::Hour => "hour",
            DurationUnit::Day => "Day",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A working-time duration bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationResult {
    /// Rounded to one decimal place.
    pub time: f64,
    pub unit: DurationUnit,
}

impl fmt::Display for DurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.unit)
    }
}

/// Round half away from zero to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Bucket an effective duration in milliseconds.
///
/// NaN falls through to the day bucket and stays NaN.
pub fn bucket(part: f64) -> DurationResult {
    if part < SEVEN_HOURS_MS {
        DurationResult {
            time: round_tenth(part / MINUTE_MS),
            unit: DurationUnit::Minute,
        }
    } else if part < TWO_DAYS_MS {
        DurationResult {
            time: round_tenth(part / HOUR_MS),
            unit: DurationUnit::Hour,
        }
    } else {
        DurationResult {
            time: round_tenth(part / DAY_MS),
            unit: DurationUnit::Day,
        }
    }
}

/// Compute the working-time duration of `[start, end)` and pick a display unit.
pub fn classify<W: WorkTime + ?Sized>(
    start: f64,
    end: f64,
    work_time: &W,
) -> Result<DurationResult, TooltipError> {
    let part = work_time.calc_work_duration(end, start)?.as_millis();
    if part < 0.0 {
        return Err(TooltipError::NegativeDuration(part));
    }
    let result = bucket(part);
    tracing::trace!(start, end, part, %result, "classified task duration");
    Ok(result)
}
