use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{0}` needs an active runtime (composition, effect, event handler or task)")]
    NoRuntime(&'static str),
    #[error("failed to spawn task: {0}")]
    Spawn(#[from] futures::task::SpawnError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure of an asset read. Cloneable so it can be stored in UI state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("no asset loader installed")]
    NoLoader,
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("refusing to read {0}: path leaves the asset root")]
    InvalidPath(String),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },
}
