mod blocking;
mod error;
mod store;

pub use blocking::BlockingBreakdownStore;
pub use error::ServiceError;
pub use store::{is_valid_task_id, BreakdownStore};

pub use taskgraph_core::{build, Breakdown, CriticalPath, Progress, Subtask};
