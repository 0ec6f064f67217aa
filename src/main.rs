#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gantt_tooltip::app::TooltipApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gantt_tooltip=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 560.0])
            .with_min_inner_size([640.0, 320.0])
            .with_title("Gantt Tooltip"),
        ..Default::default()
    };

    eframe::run_native(
        "Gantt Tooltip",
        options,
        Box::new(|cc| Ok(Box::new(TooltipApp::new(cc)))),
    )
}
