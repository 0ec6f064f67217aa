use crate::app::TooltipApp;
use crate::tooltip::TimeZoneSetting;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut TooltipApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button("  File  ", |ui| {
            if ui.button("  Open...").clicked() {
                app.open_project();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_project();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_project_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import CSV...").clicked() {
                app.import_csv();
                ui.close_menu();
            }
        });

        ui.menu_button("  View  ", |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.viewport.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.viewport.zoom_out();
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Tooltip").small().weak());
            let mut custom = app.settings.use_custom_tooltip;
            if ui.checkbox(&mut custom, "Compact tooltip").changed() {
                app.set_custom_tooltip(custom);
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Time zone").small().weak());
            let zone = app.settings.time_zone;
            if ui.radio(zone == TimeZoneSetting::Local, "Local").clicked() {
                app.set_time_zone(TimeZoneSetting::Local);
                ui.close_menu();
            }
            if ui.radio(zone == TimeZoneSetting::utc(), "UTC").clicked() {
                app.set_time_zone(TimeZoneSetting::utc());
                ui.close_menu();
            }
        });

        // Right-aligned timeline name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let unsaved = if app.file_path.is_some() { "" } else { " (unsaved)" };
            ui.label(
                RichText::new(format!("{}{}", app.project.name, unsaved))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
