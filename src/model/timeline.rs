use serde::{Deserialize, Serialize};

const HOUR_MS: f64 = 3_600_000.0;

/// Horizontal bounds of the visible drawing area, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRange {
    pub start: f32,
    pub end: f32,
}

/// The screen point a tooltip hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32,
}

impl AnchorPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<egui::Pos2> for AnchorPoint {
    fn from(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Manages the visible window of the timeline.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// Leftmost visible instant, epoch ms.
    pub start: f64,
    /// Rightmost visible instant, epoch ms.
    pub end: f64,
    /// Pixels per hour (controls zoom level).
    pub pixels_per_hour: f32,
}

impl TimelineViewport {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            pixels_per_hour: 6.0,
        }
    }

    /// Convert an instant to an x-pixel offset from the viewport start.
    pub fn time_to_x(&self, ms: f64) -> f32 {
        ((ms - self.start) / HOUR_MS) as f32 * self.pixels_per_hour
    }

    /// Total width in pixels for the visible range.
    pub fn total_width(&self) -> f32 {
        self.time_to_x(self.end)
    }

    pub fn zoom_in(&mut self) {
        self.pixels_per_hour = (self.pixels_per_hour * 1.2).min(120.0);
    }

    pub fn zoom_out(&mut self) {
        self.pixels_per_hour = (self.pixels_per_hour / 1.2).max(0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_maps_to_pixels() {
        let vp = TimelineViewport::new(0.0, 48.0 * HOUR_MS);
        assert_eq!(vp.time_to_x(2.0 * HOUR_MS), 12.0);
        assert_eq!(vp.total_width(), 288.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = TimelineViewport::new(0.0, HOUR_MS);
        for _ in 0..100 {
            vp.zoom_in();
        }
        assert_eq!(vp.pixels_per_hour, 120.0);
        for _ in 0..100 {
            vp.zoom_out();
        }
        assert_eq!(vp.pixels_per_hour, 0.5);
    }
}
