use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Display pattern for tooltip timestamps: `dd/MM/yyyy HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
/// Shown in place of a timestamp that cannot be represented.
pub const INVALID_TIMESTAMP: &str = "Invalid DateTime";

/// Which clock tooltip timestamps are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    /// Fixed offset east of UTC, in minutes.
    Fixed(i32),
}

impl TimeZoneSetting {
    pub fn utc() -> Self {
        TimeZoneSetting::Fixed(0)
    }

    /// Resolve to a concrete offset, valid at `at_ms` for the local zone.
    pub fn offset_at(&self, at_ms: i64) -> FixedOffset {
        let utc = Utc.fix();
        match self {
            TimeZoneSetting::Local => DateTime::from_timestamp_millis(at_ms)
                .map(|dt| dt.with_timezone(&Local).offset().fix())
                .unwrap_or(utc),
            TimeZoneSetting::Fixed(minutes) => {
                FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or(utc)
            }
        }
    }
}

/// Format an epoch-ms instant for display.
pub fn format_timestamp(ms: f64, zone: TimeZoneSetting) -> String {
    if !ms.is_finite() {
        return INVALID_TIMESTAMP.to_string();
    }
    let ms = ms.trunc() as i64;
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt
            .with_timezone(&zone.offset_at(ms))
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => INVALID_TIMESTAMP.to_string(),
    }
}
