pub mod breakdown;
pub mod builder;
pub mod catalog;
pub mod complexity;
pub mod error;
pub mod graph;
pub mod progress;
pub mod template;

pub use breakdown::{Breakdown, Subtask, SCHEMA_VERSION};
pub use builder::build;
pub use complexity::{classify, ComplexityTier};
pub use error::GraphError;
pub use graph::{critical_path, ready_subtasks, topological_order, validate, CriticalPath};
pub use progress::Progress;
pub use template::{select_template, Archetype, Template};
