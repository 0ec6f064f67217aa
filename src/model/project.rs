use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{Resource, ResourceId};
use super::task::Task;

/// A timeline document: ordered resource lanes and the tasks placed on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub resources: Vec<Resource>,
    pub tasks: Vec<Task>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Timeline".to_string(),
            resources: Vec::new(),
            tasks: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Lane index of a resource.
    pub fn resource_index(&self, id: &ResourceId) -> Option<usize> {
        self.resources.iter().position(|r| &r.id == id)
    }

    /// Earliest start and latest end over all tasks with finite times.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for task in &self.tasks {
            let (s, e) = (task.start_millis(), task.end_millis());
            if !s.is_finite() || !e.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(s), hi.max(e)),
                None => (s, e),
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_bounds_skip_unparseable_tasks() {
        let crew = ResourceId::new("crew");
        let mut project = Project::new("Site");
        project.tasks.push(Task::new("a", crew.clone(), 5_000.0, 9_000.0));
        project.tasks.push(Task::new("b", crew.clone(), 1_000.0, 4_000.0));
        project.tasks.push(Task::new("c", crew.clone(), "soon", "later"));
        assert_eq!(project.time_bounds(), Some((1_000.0, 9_000.0)));
    }

    #[test]
    fn resource_index_follows_lane_order() {
        let mut project = Project::new("Site");
        project.resources = vec![
            Resource::with_id("a", "Alpha"),
            Resource::with_id("b", "Beta"),
        ];
        assert_eq!(project.resource_index(&ResourceId::new("b")), Some(1));
        assert_eq!(project.resource_index(&ResourceId::new("z")), None);
    }
}
