use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

use crate::error::TooltipError;
use crate::model::{Resource, Task, Timestamp};

/// Lane used for rows that name no resource.
pub const UNASSIGNED: &str = "Unassigned";

/// Tasks and lanes read from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvImport {
    /// Lanes in order of first appearance.
    pub resources: Vec<Resource>,
    pub tasks: Vec<Task>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Label,
    Start,
    End,
    Progress,
    Resource,
    Description,
}

/// Map a status word or a percentage ("40", "40%") to percent complete.
fn parse_progress(s: &str) -> f64 {
    let s = s.trim();
    if let Ok(pct) = s.trim_end_matches('%').trim().parse::<f64>() {
        return pct.clamp(0.0, 100.0);
    }
    match s.to_lowercase().as_str() {
        "finished" | "done" | "complete" | "completed" => 100.0,
        "in progress" | "in-progress" | "active" | "started" => 50.0,
        "released" | "planned" => 25.0,
        _ => 0.0,
    }
}

/// Parse a timestamp cell: epoch milliseconds, or a date/time read as UTC.
fn parse_timestamp(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms as f64);
    }
    for fmt in &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%d.%m.%Y %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis() as f64);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

fn header_to_column(h: &str) -> Option<Column> {
    let normalized = h.trim().to_lowercase().replace([' ', '-', '_'], "");
    match normalized.as_str() {
        "label" | "name" | "task" | "tasklabel" | "taskname" | "title" => Some(Column::Label),
        "start" | "startdate" | "starttime" | "from" | "begin" => Some(Column::Start),
        "end" | "enddate" | "endtime" | "to" | "finish" | "due" => Some(Column::End),
        "progress" | "completed" | "completedpercentage" | "percent" | "status" => {
            Some(Column::Progress)
        }
        "resource" | "resourceid" | "lane" | "assignee" | "machine" | "owner" => {
            Some(Column::Resource)
        }
        "description" | "notes" | "note" | "details" | "comment" => Some(Column::Description),
        _ => None,
    }
}

/// Import tasks from a CSV file.
pub fn import_csv(path: &Path) -> Result<CsvImport, TooltipError> {
    let content = std::fs::read_to_string(path)?;
    let import = import_csv_str(&content)?;
    tracing::info!(
        path = %path.display(),
        tasks = import.tasks.len(),
        resources = import.resources.len(),
        skipped = import.skipped,
        "CSV imported"
    );
    Ok(import)
}

/// Import tasks from CSV text.
///
/// Auto-detects the delimiter and matches headers loosely. Rows without a
/// label or with unreadable times are skipped; end is clamped to start.
pub fn import_csv_str(content: &str) -> Result<CsvImport, TooltipError> {
    let first_line = content.lines().next().unwrap_or("");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(first_line))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(header_to_column).collect();

    let has = |c: Column| columns.contains(&Some(c));
    if !has(Column::Label) || !has(Column::Start) || !has(Column::End) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(TooltipError::Import(format!(
            "CSV is missing required columns. Found headers: {:?}. \
             Need columns for: label, start, end.",
            found
        )));
    }

    let mut resources: Vec<Resource> = Vec::new();
    let mut tasks = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let field = |c: Column| {
            columns
                .iter()
                .position(|col| *col == Some(c))
                .and_then(|idx| record.get(idx))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let Some(label) = field(Column::Label) else {
            skipped += 1;
            continue;
        };
        let (Some(start), Some(end)) = (
            field(Column::Start).and_then(parse_timestamp),
            field(Column::End).and_then(parse_timestamp),
        ) else {
            tracing::warn!(row, label, "skipping CSV row with unreadable start or end");
            skipped += 1;
            continue;
        };

        let lane_name = field(Column::Resource).unwrap_or(UNASSIGNED);
        let resource_id = match resources.iter().find(|r| r.name == lane_name) {
            Some(r) => r.id.clone(),
            None => {
                let r = Resource::new(lane_name);
                let id = r.id.clone();
                resources.push(r);
                id
            }
        };

        let mut task = Task::new(label, resource_id, Timestamp::Millis(start), end.max(start));
        task.completed_percentage = field(Column::Progress).map(parse_progress).unwrap_or(0.0);
        task.description = field(Column::Description).map(str::to_string);
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(TooltipError::Import(if skipped > 0 {
            format!("No valid tasks found in CSV ({} rows skipped)", skipped)
        } else {
            "CSV file is empty or has no data rows".to_string()
        }));
    }

    Ok(CsvImport {
        resources,
        tasks,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_semicolon_file_with_lanes() {
        let csv = "Task Label;Start;End;Status;Resource;Notes\n\
                   Dig;2024-03-04 08:00;2024-03-04 12:30;Finished;Excavator;\n\
                   Pour;04/03/2024 13:00;05/03/2024 09:00;40%;Mixer;Slow set\n\
                   Level;2024-03-05;2024-03-06;;Excavator;\n";
        let import = import_csv_str(csv).unwrap();
        assert_eq!(import.skipped, 0);
        assert_eq!(import.tasks.len(), 3);
        let names: Vec<&str> = import.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Excavator", "Mixer"]);

        let dig = &import.tasks[0];
        assert_eq!(dig.completed_percentage, 100.0);
        assert_eq!(dig.description, None);
        assert_eq!(dig.end_millis() - dig.start_millis(), 4.5 * 3_600_000.0);
        assert_eq!(import.tasks[2].resource_id, dig.resource_id);

        let pour = &import.tasks[1];
        assert_eq!(pour.completed_percentage, 40.0);
        assert_eq!(pour.description.as_deref(), Some("Slow set"));
    }

    #[test]
    fn accepts_epoch_millis_and_defaults_lane() {
        let csv = "label,start,end\nPing,1000,61000\n";
        let import = import_csv_str(csv).unwrap();
        assert_eq!(import.resources[0].name, UNASSIGNED);
        assert_eq!(import.tasks[0].start_millis(), 1000.0);
        assert_eq!(import.tasks[0].end_millis(), 61000.0);
    }

    #[test]
    fn skips_bad_rows_and_clamps_inverted_spans() {
        let csv = "label,start,end\n\
                   ,1000,2000\n\
                   Broken,someday,2000\n\
                   Backwards,5000,1000\n";
        let import = import_csv_str(csv).unwrap();
        assert_eq!(import.skipped, 2);
        assert_eq!(import.tasks[0].end_millis(), 5000.0);
    }

    #[test]
    fn rejects_missing_columns() {
        let err = import_csv_str("name,when\nA,today\n").unwrap_err();
        assert!(err.to_string().contains("missing required columns"));
    }

    #[test]
    fn rejects_files_without_tasks() {
        assert!(import_csv_str("label,start,end\n").is_err());
    }

    #[test]
    fn progress_words_and_numbers() {
        assert_eq!(parse_progress("in progress"), 50.0);
        assert_eq!(parse_progress(" 12.5 % "), 12.5);
        assert_eq!(parse_progress("250"), 100.0);
        assert_eq!(parse_progress("blocked"), 0.0);
    }
}
