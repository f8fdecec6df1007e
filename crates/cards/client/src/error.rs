use cards_store::StoreError;
use cards_types::{Pathspec, PathspecError};
use thiserror::Error;

/// Result type for card client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-layer errors.
///
/// Raised, never locally recovered: collaborator failures propagate
/// unchanged, with no retry and no silent fallback.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Pathspec(#[from] PathspecError),

    #[error("no datastore metadata (`ds-type`) found for task {0}")]
    UnresolvableDatastore(Pathspec),

    #[error("no storage root resolved for task {pathspec} (backend '{backend}')")]
    UnresolvedStorageRoot { pathspec: Pathspec, backend: String },

    #[error("card index {index} out of range (container holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("task not found: {0}")]
    TaskNotFound(Pathspec),

    #[error("collaborator failure: {0}")]
    Collaborator(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("preview failed: {0}")]
    Preview(String),
}
