use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("subtask id must not be empty")]
    EmptyId,

    #[error("duplicate subtask id: {0}")]
    DuplicateId(String),

    #[error("subtask {0} depends on itself")]
    SelfDependency(String),

    #[error("subtask {subtask} depends on unknown subtask {dependency}")]
    UnknownDependency { subtask: String, dependency: String },

    #[error("dependency cycle through: {}", .0.join(", "))]
    Cycle(Vec<String>),

    #[error("subtask {0} has no estimated duration")]
    ZeroDuration(String),

    #[error("total of {recorded} minutes does not match the subtask sum of {computed}")]
    TotalMismatch { recorded: u32, computed: u64 },
}
