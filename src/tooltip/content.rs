use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::duration::DurationResult;
use crate::model::{ResourceId, Task, TaskTime};

/// Caller-supplied display strings, passed through to the built-in layout untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(pub BTreeMap<String, String>);

impl Localized {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up `key`, falling back to `default` when absent.
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

/// Size limits of the box a custom renderer draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl ContainerBounds {
    pub const FIXED: ContainerBounds = ContainerBounds {
        min_width: 190.0,
        max_width: 251.0,
        min_height: 90.0,
        max_height: 101.0,
    };

    /// Size the container takes for content of the given natural size.
    pub fn clamp(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}

/// How the tooltip body is drawn: the built-in layout or a caller's renderer.
pub enum TooltipRenderer<F> {
    BuiltIn,
    Custom(F),
}

impl<F> Default for TooltipRenderer<F> {
    fn default() -> Self {
        TooltipRenderer::BuiltIn
    }
}

/// Everything the built-in layout shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTooltipData {
    pub duration: DurationResult,
    pub end_duration: String,
    pub start_duration: String,
    pub label: String,
    pub localized: Localized,
    pub percentage: String,
    pub completed_percentage: f64,
}

/// The task as a custom renderer sees it, with display-formatted start and end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTooltipData {
    pub label: String,
    pub description: Option<String>,
    pub completed_percentage: f64,
    pub resource_id: ResourceId,
    /// Raw start and end as stored on the task.
    pub time: TaskTime,
    pub start: String,
    pub end: String,
}

pub enum RenderPayload<'r, F> {
    BuiltIn(DefaultTooltipData),
    Custom {
        renderer: &'r F,
        data: CustomTooltipData,
        bounds: ContainerBounds,
    },
}

/// Label, plus the description on its own line when there is one.
pub fn tooltip_text(label: &str, description: Option<&str>) -> String {
    match description {
        Some(d) if !d.is_empty() => format!("{label}\n{d}"),
        _ => label.to_string(),
    }
}

pub fn percentage_text(completed_percentage: f64) -> String {
    format!("{completed_percentage}%")
}

pub fn assemble<'r, F>(
    task: &Task,
    formatted_start: String,
    formatted_end: String,
    duration: DurationResult,
    localized: &Localized,
    renderer: &'r TooltipRenderer<F>,
) -> RenderPayload<'r, F> {
    match renderer {
        TooltipRenderer::BuiltIn => RenderPayload::BuiltIn(DefaultTooltipData {
            duration,
            end_duration: formatted_end,
            start_duration: formatted_start,
            label: tooltip_text(&task.label, task.description.as_deref()),
            localized: localized.clone(),
            percentage: percentage_text(task.completed_percentage),
            completed_percentage: task.completed_percentage,
        }),
        TooltipRenderer::Custom(renderer) => RenderPayload::Custom {
            renderer,
            data: CustomTooltipData {
                label: task.label.clone(),
                description: task.description.clone(),
                completed_percentage: task.completed_percentage,
                resource_id: task.resource_id.clone(),
                time: task.time.clone(),
                start: formatted_start,
                end: formatted_end,
            },
            bounds: ContainerBounds::FIXED,
        },
    }
}
