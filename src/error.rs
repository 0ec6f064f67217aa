//! Error type shared by the tooltip derivations and the file layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TooltipError {
    /// The working-time engine could not compute an effective duration.
    #[error("Working-time calculation failed: {0}")]
    WorkTime(String),

    /// The working-time engine returned a span below zero.
    #[error("Working-time engine returned a negative duration: {0} ms")]
    NegativeDuration(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timeline document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV parsed but produced nothing usable.
    #[error("{0}")]
    Import(String),
}
