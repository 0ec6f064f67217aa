use std::path::Path;

use crate::error::TooltipError;
use crate::model::Project;

/// Save a timeline document to a JSON file.
pub fn save_project(project: &Project, path: &Path) -> Result<(), TooltipError> {
    let json = serde_json::to_string_pretty(project)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), tasks = project.tasks.len(), "timeline saved");
    Ok(())
}

/// Load a timeline document from a JSON file.
pub fn load_project(path: &Path) -> Result<Project, TooltipError> {
    let json = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&json)?;
    tracing::info!(
        path = %path.display(),
        resources = project.resources.len(),
        tasks = project.tasks.len(),
        "timeline loaded"
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Resource, Task};

    #[test]
    fn save_and_load_keep_lanes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.timeline.json");

        let mut project = Project::new("Site");
        project.resources = vec![Resource::new("Header"), Resource::new("Crew A"), Resource::new("Crane")];
        let mut task = Task::new("Lift beams", project.resources[2].id.clone(), 0.0, "3600000");
        task.description = Some("Level 3".into());
        project.tasks.push(task);

        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.resources, project.resources);
        assert_eq!(loaded.tasks, project.tasks);
    }

    #[test]
    fn reports_malformed_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(load_project(&path), Err(TooltipError::Json(_))));
    }

    #[test]
    fn reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_project(&dir.path().join("absent.json")),
            Err(TooltipError::Io(_))
        ));
    }
}
