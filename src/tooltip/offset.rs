//! Where the tooltip goes relative to its anchor.
//!
//! Horizontally the tooltip sits a little right of the anchor, unless that
//! would run past the right edge of the draw range, in which case it flips
//! to the left. Vertically it is lifted above the anchor by a lane-dependent
//! amount: the second lane sits under a reserved top row and needs the least
//! clearance, the last lane the most.

use serde::{Deserialize, Serialize};

use crate::model::{AnchorPoint, Resource, ResourceId};

/// Horizontal offset used when the tooltip would overflow the right edge.
pub const RIGHT_MARGIN: f32 = -230.0;
/// Default horizontal offset.
pub const STANDARD_MARGIN: f32 = 15.0;
/// Vertical clearance unit.
pub const MARGIN_Y_UNIT: f32 = 25.0;

/// Offset to apply to an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    pub x: f32,
    pub y: f32,
}

impl OffsetResult {
    /// Final tooltip position. The vertical offset lifts the tooltip up.
    pub fn apply(&self, anchor: AnchorPoint) -> egui::Pos2 {
        egui::pos2(anchor.x + self.x, anchor.y - self.y)
    }
}

/// Which lane a task sits on, as far as placement cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    Second,
    Last,
    Other,
}

impl LanePosition {
    /// Classify a resource id against the ordered lane list.
    ///
    /// Lists with fewer than two lanes have no distinguished second or last
    /// lane, so everything on them is `Other`. With exactly two lanes the
    /// second lane is also the last; `Second` wins.
    pub fn of(resource_id: &ResourceId, resources: &[Resource]) -> Self {
        if resources.len() < 2 {
            if resources.is_empty() {
                tracing::debug!(%resource_id, "placing tooltip with no resource lanes");
            }
            return LanePosition::Other;
        }
        if resources[1].id == *resource_id {
            LanePosition::Second
        } else if resources[resources.len() - 1].id == *resource_id {
            LanePosition::Last
        } else {
            LanePosition::Other
        }
    }

    pub fn vertical_offset(&self) -> f32 {
        match self {
            LanePosition::Second => MARGIN_Y_UNIT,
            LanePosition::Last => MARGIN_Y_UNIT * 4.0,
            LanePosition::Other => MARGIN_Y_UNIT * 2.0,
        }
    }
}

/// Horizontal offset: flip left when the anchor is within reach of the right edge.
pub fn horizontal_offset(anchor_x: f32, draw_range_end: f32) -> f32 {
    if anchor_x > draw_range_end + RIGHT_MARGIN {
        RIGHT_MARGIN
    } else {
        STANDARD_MARGIN
    }
}

pub fn place(
    anchor_x: f32,
    draw_range_end: f32,
    resource_id: &ResourceId,
    resources: &[Resource],
) -> OffsetResult {
    OffsetResult {
        x: horizontal_offset(anchor_x, draw_range_end),
        y: LanePosition::of(resource_id, resources).vertical_offset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes(n: usize) -> Vec<Resource> {
        (0..n)
            .map(|i| Resource::with_id(format!("r{i}"), format!("Lane {i}")))
            .collect()
    }

    fn id(s: &str) -> ResourceId {
        ResourceId::new(s)
    }

    #[test]
    fn second_lane_without_overflow() {
        let r = lanes(4);
        assert_eq!(place(0.0, 1000.0, &id("r1"), &r), OffsetResult { x: 15.0, y: 25.0 });
    }

    #[test]
    fn second_lane_with_overflow() {
        let r = lanes(4);
        assert_eq!(place(1000.0, 100.0, &id("r1"), &r), OffsetResult { x: -230.0, y: 25.0 });
    }

    #[test]
    fn last_lane() {
        let r = lanes(4);
        assert_eq!(place(0.0, 1000.0, &id("r3"), &r), OffsetResult { x: 15.0, y: 100.0 });
        assert_eq!(place(900.0, 1000.0, &id("r3"), &r), OffsetResult { x: -230.0, y: 100.0 });
    }

    #[test]
    fn first_and_middle_lanes() {
        let r = lanes(4);
        assert_eq!(place(0.0, 1000.0, &id("r0"), &r), OffsetResult { x: 15.0, y: 50.0 });
        assert_eq!(place(0.0, 1000.0, &id("r2"), &r), OffsetResult { x: 15.0, y: 50.0 });
        assert_eq!(place(0.0, 1000.0, &id("unknown"), &r), OffsetResult { x: 15.0, y: 50.0 });
    }

    #[test]
    fn overflow_threshold_is_strict() {
        // 770 == 1000 - 230: not past the edge yet.
        assert_eq!(horizontal_offset(770.0, 1000.0), STANDARD_MARGIN);
        assert_eq!(horizontal_offset(770.5, 1000.0), RIGHT_MARGIN);
    }

    #[test]
    fn two_lanes_prefer_second_over_last() {
        let r = lanes(2);
        assert_eq!(LanePosition::of(&id("r1"), &r), LanePosition::Second);
        assert_eq!(LanePosition::of(&id("r0"), &r), LanePosition::Other);
    }

    #[test]
    fn short_lane_lists_fall_back_to_middle() {
        assert_eq!(LanePosition::of(&id("r0"), &lanes(1)), LanePosition::Other);
        assert_eq!(LanePosition::of(&id("r0"), &[]), LanePosition::Other);
        assert_eq!(place(0.0, 1000.0, &id("r0"), &lanes(1)).y, 50.0);
    }

    #[test]
    fn apply_lifts_tooltip_above_anchor() {
        let offset = OffsetResult { x: 15.0, y: 50.0 };
        assert_eq!(offset.apply(AnchorPoint::new(100.0, 200.0)), egui::pos2(115.0, 150.0));
    }

    #[test]
    fn placement_is_deterministic() {
        let r = lanes(5);
        let a = place(640.0, 800.0, &id("r4"), &r);
        let b = place(640.0, 800.0, &id("r4"), &r);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}
