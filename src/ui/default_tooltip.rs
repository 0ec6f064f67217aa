//! Built-in tooltip layout.

use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::tooltip::DefaultTooltipData;
use crate::ui::theme;

const WIDTH: f32 = 220.0;

/// Render the default layout for a task tooltip.
pub fn show(ui: &mut Ui, data: &DefaultTooltipData) {
    ui.set_width(WIDTH);
    let loc = &data.localized;

    let mut lines = data.label.lines();
    if let Some(title) = lines.next() {
        ui.label(RichText::new(title).strong().color(theme::TEXT_PRIMARY));
    }
    for line in lines {
        ui.label(RichText::new(line).font(theme::font_sub()).color(theme::TEXT_SECONDARY));
    }
    ui.add_space(4.0);

    egui::Grid::new("default-tooltip-grid")
        .num_columns(2)
        .spacing([8.0, 2.0])
        .show(ui, |ui| {
            row(ui, icons::CALENDAR, loc.text("start", "Start"), &data.start_duration);
            row(ui, icons::CALENDAR_CHECK, loc.text("end", "End"), &data.end_duration);
            row(
                ui,
                icons::HOURGLASS,
                loc.text("duration", "Duration"),
                &data.duration.to_string(),
            );
        });

    ui.add_space(4.0);
    let progress = (data.completed_percentage / 100.0).clamp(0.0, 1.0) as f32;
    ui.add(
        egui::ProgressBar::new(progress)
            .desired_width(WIDTH)
            .text(format!("{} {}", loc.text("progress", "Progress"), data.percentage)),
    );
}

fn row(ui: &mut Ui, icon: &str, caption: &str, value: &str) {
    ui.label(
        RichText::new(format!("{icon} {caption}"))
            .font(theme::font_small())
            .color(theme::TEXT_DIM),
    );
    ui.label(RichText::new(value).font(theme::font_sub()));
    ui.end_row();
}
