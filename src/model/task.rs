use serde::{Deserialize, Serialize};

use super::resource::ResourceId;

/// An epoch-millisecond instant, as it arrives from a timeline document.
///
/// Documents may carry timestamps as numbers or as numeric strings, so both
/// are accepted and coerced on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(f64),
    Text(String),
}

impl Timestamp {
    /// Coerce to milliseconds. Blank text is `0`, anything non-numeric is `NaN`.
    ///
    /// Text goes through `str::parse::<f64>`, so `"inf"` and `"NaN"` parse as
    /// those values and hex such as `"0x1A"` is rejected (becomes `NaN`).
    pub fn as_millis(&self) -> f64 {
        match self {
            Timestamp::Millis(ms) => *ms,
            Timestamp::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl From<f64> for Timestamp {
    fn from(ms: f64) -> Self {
        Timestamp::Millis(ms)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Timestamp::Text(s.to_string())
    }
}

/// Start and end of a task. `end >= start` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTime {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// A single bar on a resource lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Progress in percent, 0 to 100.
    #[serde(default)]
    pub completed_percentage: f64,
    pub time: TaskTime,
    pub resource_id: ResourceId,
}

impl Task {
    pub fn new(
        label: impl Into<String>,
        resource_id: ResourceId,
        start: impl Into<Timestamp>,
        end: impl Into<Timestamp>,
    ) -> Self {
        Self {
            label: label.into(),
            description: None,
            completed_percentage: 0.0,
            time: TaskTime {
                start: start.into(),
                end: end.into(),
            },
            resource_id,
        }
    }

    pub fn start_millis(&self) -> f64 {
        self.time.start.as_millis()
    }

    pub fn end_millis(&self) -> f64 {
        self.time.end.as_millis()
    }
}
