use chrono::{DateTime, Datelike};
use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::model::{AnchorPoint, DrawRange, Project, Task, TimelineViewport};
use crate::tooltip::{self, Localized, TimeZoneSetting, TooltipContext, TooltipRenderer, WorkTime};
use crate::ui::theme;
use crate::ui::tooltip_view::{self, CustomTooltipFn};

const LANE_HEIGHT: f32 = theme::LANE_HEIGHT;
const LANE_GAP: f32 = theme::LANE_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const DAY_MS: f64 = 86_400_000.0;

/// What the chart needs to build tooltips.
pub struct ChartTooltip<'a> {
    pub localized: &'a Localized,
    pub renderer: &'a TooltipRenderer<CustomTooltipFn>,
    pub work_time: &'a dyn WorkTime,
    pub time_zone: TimeZoneSetting,
}

/// Result details from interactions in the chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Index into `project.tasks` of the bar under the pointer.
    pub hovered_task: Option<usize>,
    /// Set when the tooltip for the hovered bar could not be derived.
    pub tooltip_error: Option<String>,
}

/// Render the resource-lane chart with hover tooltips.
pub fn show_timeline_chart(
    project: &Project,
    viewport: &mut TimelineViewport,
    hover: &ChartTooltip<'_>,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let available = ui.available_size();
    let chart_width = viewport.total_width().max(available.x);
    let chart_height =
        HEADER_HEIGHT + project.resources.len() as f32 * (LANE_HEIGHT + LANE_GAP) + 20.0;

    // Zoom with Ctrl + scroll wheel
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        if scroll_delta.y > 0.0 {
            viewport.zoom_in();
        } else if scroll_delta.y < 0.0 {
            viewport.zoom_out();
        }
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;
            let visible = ui.clip_rect();
            let draw_range = DrawRange {
                start: visible.left(),
                end: visible.right(),
            };

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
            draw_header(&painter, origin, viewport, chart_width, chart_height, hover.time_zone);

            for (lane, resource) in project.resources.iter().enumerate() {
                let y = lane_top(origin, lane);
                let lane_bg = if lane % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };
                painter.rect_filled(
                    Rect::from_min_size(
                        Pos2::new(origin.x, y),
                        Vec2::new(chart_width, LANE_HEIGHT + LANE_GAP),
                    ),
                    0.0,
                    lane_bg,
                );
                painter.line_segment(
                    [
                        Pos2::new(origin.x, y + LANE_HEIGHT + LANE_GAP),
                        Pos2::new(origin.x + chart_width, y + LANE_HEIGHT + LANE_GAP),
                    ],
                    Stroke::new(0.5, theme::BORDER_SUBTLE),
                );
                // Lane name pinned to the visible left edge
                painter.text(
                    Pos2::new(visible.left() + 6.0, y + LANE_HEIGHT / 2.0),
                    egui::Align2::LEFT_CENTER,
                    &resource.name,
                    theme::font_small(),
                    theme::TEXT_DIM,
                );
            }

            let pointer = response.hover_pos();
            for (index, task) in project.tasks.iter().enumerate() {
                let Some(lane) = project.resource_index(&task.resource_id) else {
                    continue;
                };
                let Some(bar_rect) = bar_rect(origin, viewport, task, lane) else {
                    continue;
                };
                let hovered = pointer.is_some_and(|p| bar_rect.contains(p));
                draw_task_bar(&painter, task, bar_rect, hovered);
                if hovered {
                    interaction.hovered_task = Some(index);
                }
            }

            if let (Some(index), Some(pointer)) = (interaction.hovered_task, pointer) {
                let task = &project.tasks[index];
                let ctx = TooltipContext {
                    draw_range,
                    resources: &project.resources,
                    localized: hover.localized,
                    renderer: hover.renderer,
                    work_time: hover.work_time,
                    time_zone: hover.time_zone,
                };
                match tooltip::derive_tooltip(task, AnchorPoint::from(pointer), &ctx) {
                    Ok(tip) => tooltip_view::show_tooltip(
                        ui.ctx(),
                        egui::Id::new(("task-tooltip", index)),
                        &tip,
                    ),
                    Err(e) => {
                        tracing::warn!(task = %task.label, error = %e, "tooltip derivation failed");
                        interaction.tooltip_error = Some(e.to_string());
                    }
                }
            }
        });

    interaction
}

fn lane_top(origin: Pos2, lane: usize) -> f32 {
    origin.y + HEADER_HEIGHT + lane as f32 * (LANE_HEIGHT + LANE_GAP)
}

/// Screen rect of a task bar, or `None` when its times are unusable.
fn bar_rect(origin: Pos2, viewport: &TimelineViewport, task: &Task, lane: usize) -> Option<Rect> {
    let (start, end) = (task.start_millis(), task.end_millis());
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let x_start = origin.x + viewport.time_to_x(start);
    let x_end = origin.x + viewport.time_to_x(end);
    let y = lane_top(origin, lane) + theme::BAR_INSET;
    Some(Rect::from_min_size(
        Pos2::new(x_start, y),
        Vec2::new((x_end - x_start).max(6.0), LANE_HEIGHT - theme::BAR_INSET * 2.0),
    ))
}

fn draw_header(
    painter: &egui::Painter,
    origin: Pos2,
    viewport: &TimelineViewport,
    width: f32,
    height: f32,
    time_zone: TimeZoneSetting,
) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    // One tick per day, starting at the first midnight (UTC) in view
    let mut day = (viewport.start / DAY_MS).ceil() * DAY_MS;
    let label_every = if viewport.pixels_per_hour * 24.0 >= 60.0 { 1 } else { 7 };
    while day <= viewport.end {
        let x = origin.x + viewport.time_to_x(day);
        painter.line_segment(
            [Pos2::new(x, origin.y + HEADER_HEIGHT), Pos2::new(x, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE),
        );

        let ms = day as i64;
        if let Some(date) = DateTime::from_timestamp_millis(ms) {
            let local = date.with_timezone(&time_zone.offset_at(ms));
            if local.ordinal0() % label_every == 0 {
                painter.text(
                    Pos2::new(x + 3.0, origin.y + HEADER_HEIGHT / 2.0),
                    egui::Align2::LEFT_CENTER,
                    local.format("%a %d/%m").to_string(),
                    theme::font_sub(),
                    theme::TEXT_SECONDARY,
                );
            }
        }
        day += DAY_MS;
    }
}

fn draw_task_bar(painter: &egui::Painter, task: &Task, bar_rect: Rect, hovered: bool) {
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        Color32::from_black_alpha(35),
    );
    painter.rect_filled(bar_rect, rounding, theme::progress_color(task.completed_percentage));

    let progress = (task.completed_percentage / 100.0).clamp(0.0, 1.0) as f32;
    if progress > 0.0 {
        let progress_rect =
            Rect::from_min_size(bar_rect.min, Vec2::new(bar_rect.width() * progress, bar_rect.height()));
        painter.rect_filled(progress_rect, rounding, theme::PROGRESS_OVERLAY);
    }

    if hovered {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Label on bar (single line, clipped to bar bounds)
    if bar_rect.width() > 30.0 {
        let galley = painter.layout_no_wrap(task.label.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        painter.with_clip_rect(bar_rect).galley(
            Pos2::new(bar_rect.left() + 6.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }
}
