//! Paints a derived tooltip as an overlay above the chart.

use egui::{Id, Rect, Ui, UiBuilder};

use crate::tooltip::{ContainerBounds, CustomTooltipData, RenderPayload, Tooltip};
use crate::ui::{default_tooltip, theme};

/// A caller-supplied tooltip body.
pub type CustomTooltipFn = Box<dyn Fn(&mut Ui, &CustomTooltipData)>;

/// Show `tooltip` at its derived position, above everything else.
pub fn show_tooltip(ctx: &egui::Context, id: Id, tooltip: &Tooltip<'_, CustomTooltipFn>) {
    egui::Area::new(id)
        .order(egui::Order::Tooltip)
        .fixed_pos(tooltip.position)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::BG_TOOLTIP)
                .show(ui, |ui| match &tooltip.payload {
                    RenderPayload::BuiltIn(data) => default_tooltip::show(ui, data),
                    RenderPayload::Custom {
                        renderer,
                        data,
                        bounds,
                    } => show_contained(ui, *bounds, |ui| renderer(ui, data)),
                });
        });
}

/// Run `add_contents` in a box that never grows past `bounds` nor shrinks below them.
/// Anything drawn outside the box is clipped.
fn show_contained(ui: &mut Ui, bounds: ContainerBounds, add_contents: impl FnOnce(&mut Ui)) {
    let max_rect = Rect::from_min_size(
        ui.cursor().min,
        egui::vec2(bounds.max_width, bounds.max_height),
    );
    let layout = *ui.layout();
    let clip = max_rect.intersect(ui.clip_rect());
    let mut child = ui.new_child(UiBuilder::new().max_rect(max_rect).layout(layout));
    child.set_clip_rect(clip);
    child.set_min_size(egui::vec2(bounds.min_width, bounds.min_height));
    add_contents(&mut child);

    let natural = child.min_rect().size();
    let (width, height) = bounds.clamp(natural.x, natural.y);
    ui.allocate_space(egui::vec2(width, height));
}
