//! Derivation of a task bar's hover tooltip: duration, timestamps, placement
//! and content. Everything here is a pure function of its inputs and is
//! recomputed on every frame.

pub mod content;
pub mod duration;
pub mod format;
pub mod offset;
pub mod work_time;

pub use content::{
    assemble, ContainerBounds, CustomTooltipData, DefaultTooltipData, Localized, RenderPayload,
    TooltipRenderer,
};
pub use duration::{classify, DurationResult, DurationUnit};
pub use format::{format_timestamp, TimeZoneSetting};
pub use offset::{place, LanePosition, OffsetResult};
pub use work_time::{ContinuousTime, WorkDuration, WorkTime};

use crate::error::TooltipError;
use crate::model::{AnchorPoint, DrawRange, Resource, Task};

/// Everything the timeline supplies to a tooltip, passed explicitly.
pub struct TooltipContext<'a, W: ?Sized, F> {
    pub draw_range: DrawRange,
    pub resources: &'a [Resource],
    pub localized: &'a Localized,
    pub renderer: &'a TooltipRenderer<F>,
    pub work_time: &'a W,
    pub time_zone: TimeZoneSetting,
}

/// A fully derived tooltip, ready for the rendering boundary.
pub struct Tooltip<'r, F> {
    /// Top-left corner of the tooltip in screen space.
    pub position: egui::Pos2,
    pub offset: OffsetResult,
    pub payload: RenderPayload<'r, F>,
}

/// Derive the tooltip for `task` hovered at `anchor`.
///
/// Callers must supply at least one resource lane when the task is bound to one.
pub fn derive_tooltip<'a, W, F>(
    task: &Task,
    anchor: AnchorPoint,
    ctx: &TooltipContext<'a, W, F>,
) -> Result<Tooltip<'a, F>, TooltipError>
where
    W: WorkTime + ?Sized,
{
    let (start, end) = (task.start_millis(), task.end_millis());
    let duration = classify(start, end, ctx.work_time)?;
    let formatted_start = format_timestamp(start, ctx.time_zone);
    let formatted_end = format_timestamp(end, ctx.time_zone);

    let offset = place(anchor.x, ctx.draw_range.end, &task.resource_id, ctx.resources);
    let payload = assemble(
        task,
        formatted_start,
        formatted_end,
        duration,
        ctx.localized,
        ctx.renderer,
    );

    Ok(Tooltip {
        position: offset.apply(anchor),
        offset,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceId;

    type Render = fn(&CustomTooltipData) -> String;

    fn lanes() -> Vec<Resource> {
        ["top", "crew-a", "crew-b", "crew-c"]
            .iter()
            .map(|id| Resource::with_id(*id, id.to_uppercase()))
            .collect()
    }

    fn task_on(lane: &str) -> Task {
        // 2024-03-05 09:00 to 11:30 UTC
        let mut t = Task::new(
            "Inspect scaffolding",
            ResourceId::new(lane),
            "1709629200000",
            1_709_638_200_000.0,
        );
        t.description = Some("North face".into());
        t.completed_percentage = 80.0;
        t
    }

    fn context<'a>(
        resources: &'a [Resource],
        localized: &'a Localized,
        renderer: &'a TooltipRenderer<Render>,
    ) -> TooltipContext<'a, ContinuousTime, Render> {
        TooltipContext {
            draw_range: DrawRange { start: 0.0, end: 1000.0 },
            resources,
            localized,
            renderer,
            work_time: &ContinuousTime,
            time_zone: TimeZoneSetting::utc(),
        }
    }

    #[test]
    fn derives_built_in_tooltip() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer = TooltipRenderer::BuiltIn;
        let ctx = context(&resources, &localized, &renderer);

        let tip = derive_tooltip(&task_on("crew-a"), AnchorPoint::new(300.0, 200.0), &ctx).unwrap();
        assert_eq!(tip.offset, OffsetResult { x: 15.0, y: 25.0 });
        assert_eq!(tip.position, egui::pos2(315.0, 175.0));
        match tip.payload {
            RenderPayload::BuiltIn(data) => {
                assert_eq!(data.label, "Inspect scaffolding\nNorth face");
                assert_eq!(data.start_duration, "05/03/2024 09:00:00");
                assert_eq!(data.end_duration, "05/03/2024 11:30:00");
                assert_eq!(data.duration, DurationResult { time: 150.0, unit: DurationUnit::Minute });
                assert_eq!(data.percentage, "80%");
            }
            RenderPayload::Custom { .. } => panic!("expected built-in payload"),
        }
    }

    #[test]
    fn flips_left_near_the_right_edge_on_last_lane() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer = TooltipRenderer::BuiltIn;
        let ctx = context(&resources, &localized, &renderer);

        let tip = derive_tooltip(&task_on("crew-c"), AnchorPoint::new(900.0, 400.0), &ctx).unwrap();
        assert_eq!(tip.position, egui::pos2(670.0, 300.0));
    }

    #[test]
    fn custom_renderer_gets_formatted_task() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer: TooltipRenderer<Render> =
            TooltipRenderer::Custom(|d| format!("{}: {} -> {}", d.label, d.start, d.end));
        let ctx = context(&resources, &localized, &renderer);

        let tip = derive_tooltip(&task_on("top"), AnchorPoint::new(0.0, 0.0), &ctx).unwrap();
        assert_eq!(tip.offset.y, 50.0);
        match tip.payload {
            RenderPayload::Custom { renderer, data, .. } => assert_eq!(
                renderer(&data),
                "Inspect scaffolding: 05/03/2024 09:00:00 -> 05/03/2024 11:30:00"
            ),
            RenderPayload::BuiltIn(_) => panic!("expected custom payload"),
        }
    }

    #[test]
    fn work_time_failure_aborts_derivation() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer: TooltipRenderer<Render> = TooltipRenderer::BuiltIn;
        let failing = |_: f64, _: f64| -> Result<WorkDuration, TooltipError> {
            Err(TooltipError::WorkTime("no calendar".into()))
        };
        let ctx = TooltipContext {
            draw_range: DrawRange { start: 0.0, end: 1000.0 },
            resources: &resources,
            localized: &localized,
            renderer: &renderer,
            work_time: &failing,
            time_zone: TimeZoneSetting::utc(),
        };
        assert!(derive_tooltip(&task_on("crew-a"), AnchorPoint::new(0.0, 0.0), &ctx).is_err());
    }

    #[test]
    fn derivation_is_repeatable() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer: TooltipRenderer<Render> = TooltipRenderer::BuiltIn;
        let ctx = context(&resources, &localized, &renderer);
        let task = task_on("crew-b");
        let anchor = AnchorPoint::new(812.0, 64.0);

        let a = derive_tooltip(&task, anchor, &ctx).unwrap();
        let b = derive_tooltip(&task, anchor, &ctx).unwrap();
        assert_eq!(a.offset, b.offset);
        assert_eq!(a.position, b.position);
        match (a.payload, b.payload) {
            (RenderPayload::BuiltIn(x), RenderPayload::BuiltIn(y)) => {
                assert_eq!(x.duration.time.to_bits(), y.duration.time.to_bits());
                assert_eq!(x, y);
            }
            _ => panic!("expected built-in payloads"),
        }
    }

    #[test]
    fn unparseable_times_degrade_instead_of_failing() {
        let (resources, localized) = (lanes(), Localized::default());
        let renderer: TooltipRenderer<Render> = TooltipRenderer::BuiltIn;
        let ctx = context(&resources, &localized, &renderer);
        let mut task = task_on("crew-a");
        task.time.start = "next week".into();

        let tip = derive_tooltip(&task, AnchorPoint::new(0.0, 0.0), &ctx).unwrap();
        match tip.payload {
            RenderPayload::BuiltIn(data) => {
                assert!(data.duration.time.is_nan());
                assert_eq!(data.start_duration, format::INVALID_TIMESTAMP);
            }
            RenderPayload::Custom { .. } => panic!("expected built-in payload"),
        }
    }
}
