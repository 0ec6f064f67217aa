pub mod project;
pub mod resource;
pub mod task;
pub mod timeline;

pub use project::Project;
pub use resource::{Resource, ResourceId};
pub use task::{Task, TaskTime, Timestamp};
pub use timeline::{AnchorPoint, DrawRange, TimelineViewport};
