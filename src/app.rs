use egui::RichText;
use std::path::PathBuf;

use crate::config::AppSettings;
use crate::model::{Project, Resource, Task, TimelineViewport};
use crate::tooltip::{ContinuousTime, CustomTooltipData, TimeZoneSetting, TooltipRenderer};
use crate::ui;
use crate::ui::timeline_chart::ChartTooltip;
use crate::ui::tooltip_view::CustomTooltipFn;

const HOUR_MS: f64 = 3_600_000.0;

/// Main application state.
pub struct TooltipApp {
    pub project: Project,
    pub viewport: TimelineViewport,
    pub file_path: Option<PathBuf>,
    pub settings: AppSettings,
    settings_path: PathBuf,
    renderer: TooltipRenderer<CustomTooltipFn>,
    work_time: ContinuousTime,
    pub status_message: String,
}

impl TooltipApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Phosphor icons render inline with text in the default tooltip
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load(&settings_path);
        tracing::debug!(path = %settings_path.display(), ?settings, "settings loaded");

        let mut app = Self {
            project: Self::sample_project(),
            viewport: TimelineViewport::new(0.0, 0.0),
            file_path: None,
            renderer: renderer_for(&settings),
            settings,
            settings_path,
            work_time: ContinuousTime,
            status_message: "Ready".to_string(),
        };

        if let Some(path) = app.settings.last_file.clone() {
            app.open_path(path);
        }
        app.recalculate_viewport();
        app
    }

    /// Generate a sample timeline for demonstration.
    fn sample_project() -> Project {
        let now = chrono::Utc::now().timestamp_millis() as f64;
        let base = (now / HOUR_MS).floor() * HOUR_MS;
        let at = |hours: f64| base + hours * HOUR_MS;

        let mut project = Project::new("Sample Site");
        project.resources = vec![
            Resource::new("Milestones"),
            Resource::new("Crew A"),
            Resource::new("Crew B"),
            Resource::new("Tower Crane"),
            Resource::new("Inspection"),
        ];
        let lane = |i: usize| project.resources[i].id.clone();

        let mut tasks = vec![
            Task::new("Permits approved", lane(0), at(-30.0), at(-29.5)),
            Task::new("Excavation", lane(1), at(-26.0), at(-20.0)),
            Task::new("Formwork", lane(1), at(-8.0), at(28.0)),
            Task::new("Rebar delivery", lane(2), at(-4.0), at(-3.25)),
            Task::new("Rebar placement", lane(2), at(2.0), at(80.0)),
            Task::new("Lift steel", lane(3), at(10.0), at(19.0)),
            Task::new("Site walk", lane(4), at(30.0), at(31.5)),
        ];
        tasks[1].completed_percentage = 100.0;
        tasks[2].completed_percentage = 35.0;
        tasks[2].description = Some("East wing, levels 1-2".to_string());
        tasks[4].description = Some("Waiting on shop drawings".to_string());
        // Timestamps may arrive as strings from upstream systems
        tasks[6].time.start = format!("{}", at(30.0) as i64).as_str().into();

        project.tasks = tasks;
        project
    }

    // --- File operations ---

    pub fn open_project(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Timeline", &["timeline.json", "json"])
            .pick_file()
        {
            self.open_path(path);
            self.recalculate_viewport();
        }
    }

    fn open_path(&mut self, path: PathBuf) {
        match crate::io::load_project(&path) {
            Ok(project) => {
                self.project = project;
                self.file_path = Some(path.clone());
                self.settings.last_file = Some(path);
                self.persist_settings();
                self.status_message = "Timeline loaded".to_string();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not open timeline");
                self.status_message = format!("Error loading: {}", e);
            }
        }
    }

    pub fn save_project(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.project.touch();
            match crate::io::save_project(&self.project, &path) {
                Ok(()) => self.status_message = "Timeline saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        } else {
            self.save_project_as();
        }
    }

    pub fn save_project_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Timeline", &["timeline.json", "json"])
            .set_file_name(format!("{}.timeline.json", self.project.name))
            .save_file()
        {
            self.project.touch();
            match crate::io::save_project(&self.project, &path) {
                Ok(()) => {
                    self.file_path = Some(path.clone());
                    self.settings.last_file = Some(path);
                    self.persist_settings();
                    self.status_message = "Timeline saved".to_string();
                }
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        }
    }

    pub fn import_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            match crate::io::csv_import::import_csv(&path) {
                Ok(import) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("Imported Timeline")
                        .to_string();
                    let count = import.tasks.len();
                    self.project = Project::new(name);
                    self.project.resources = import.resources;
                    self.project.tasks = import.tasks;
                    self.file_path = None;
                    self.recalculate_viewport();

                    self.status_message = if import.skipped > 0 {
                        format!("Imported {} tasks ({} rows skipped)", count, import.skipped)
                    } else {
                        format!("Imported {} tasks", count)
                    };
                }
                Err(e) => {
                    self.status_message = format!("CSV import failed: {}", e);
                }
            }
        }
    }

    // --- Settings ---

    pub fn set_custom_tooltip(&mut self, enabled: bool) {
        self.settings.use_custom_tooltip = enabled;
        self.renderer = renderer_for(&self.settings);
        self.persist_settings();
    }

    pub fn set_time_zone(&mut self, zone: TimeZoneSetting) {
        self.settings.time_zone = zone;
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!(error = %e, "could not save settings");
            self.status_message = format!("Could not save settings: {}", e);
        }
    }

    /// Fit the viewport around all tasks with some padding.
    fn recalculate_viewport(&mut self) {
        let now = chrono::Utc::now().timestamp_millis() as f64;
        let (start, end) = self.project.time_bounds().unwrap_or((now, now));
        let zoom = self.viewport.pixels_per_hour;
        self.viewport = TimelineViewport::new(start - 12.0 * HOUR_MS, end + 24.0 * HOUR_MS);
        self.viewport.pixels_per_hour = zoom;
    }
}

/// Pick the tooltip body the settings ask for.
fn renderer_for(settings: &AppSettings) -> TooltipRenderer<CustomTooltipFn> {
    if settings.use_custom_tooltip {
        TooltipRenderer::Custom(Box::new(|ui: &mut egui::Ui, data: &CustomTooltipData| {
            ui.label(RichText::new(&data.label).strong());
            ui.label(
                RichText::new(format!("{}\n{}", data.start, data.end))
                    .font(ui::theme::font_small())
                    .color(ui::theme::TEXT_SECONDARY),
            );
            ui.label(format!("{}% done", data.completed_percentage));
            if let Some(description) = &data.description {
                ui.label(RichText::new(description).italics().color(ui::theme::TEXT_DIM));
            }
        }))
    } else {
        TooltipRenderer::BuiltIn
    }
}

impl eframe::App for TooltipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S)) {
            self.save_project();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&self.status_message)
                        .font(ui::theme::font_sub())
                        .color(ui::theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Lanes: {} · Tasks: {}",
                            self.project.resources.len(),
                            self.project.tasks.len()
                        ))
                        .size(10.5)
                        .color(ui::theme::TEXT_DIM),
                    );
                });
            });
        });

        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let hover = ChartTooltip {
                localized: &self.settings.localized,
                renderer: &self.renderer,
                work_time: &self.work_time,
                time_zone: self.settings.time_zone,
            };
            let interaction =
                ui::timeline_chart::show_timeline_chart(&self.project, &mut self.viewport, &hover, ui);
            if let Some(e) = interaction.tooltip_error {
                self.status_message = format!("Tooltip unavailable: {}", e);
            }
        });
    }
}
