pub mod default_tooltip;
pub mod theme;
pub mod timeline_chart;
pub mod toolbar;
pub mod tooltip_view;
