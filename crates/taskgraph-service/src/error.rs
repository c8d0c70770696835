use taskgraph_core::GraphError;
use taskgraph_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    /// The backend could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Config(msg) => ServiceError::Internal(msg),
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}
