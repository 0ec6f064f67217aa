//! Contract for the working-time engine.
//!
//! The engine turns a raw `[start, end)` span into the time actually worked
//! inside it. How non-working periods are defined is up to the implementor.

use crate::error::TooltipError;

/// Effective working time, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkDuration(f64);

impl WorkDuration {
    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> f64 {
        self.0
    }
}

pub trait WorkTime {
    /// Effective duration between two epoch-ms instants. Note the argument
    /// order: end first, then start.
    fn calc_work_duration(&self, end: f64, start: f64) -> Result<WorkDuration, TooltipError>;
}

impl<F> WorkTime for F
where
    F: Fn(f64, f64) -> Result<WorkDuration, TooltipError>,
{
    fn calc_work_duration(&self, end: f64, start: f64) -> Result<WorkDuration, TooltipError> {
        self(end, start)
    }
}

/// Every millisecond counts as working time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuousTime;

impl WorkTime for ContinuousTime {
    fn calc_work_duration(&self, end: f64, start: f64) -> Result<WorkDuration, TooltipError> {
        let span = end - start;
        // NaN must pass through untouched, so no `f64::max` here.
        Ok(WorkDuration(if span < 0.0 { 0.0 } else { span }))
    }
}
