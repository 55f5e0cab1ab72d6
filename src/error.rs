use thiserror::Error;

/// Errors surfaced by the engine and its data adapters.
#[derive(Debug, Error)]
pub enum MlpError {
    /// A vector's length differs from the fan-in or output width it is fed to.
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A training phase ran before the phase that populates its metadata.
    #[error("uninitialized state: {0}")]
    UninitializedState(&'static str),

    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("cannot train on an empty example set")]
    EmptyDataset,

    /// Malformed example file contents.
    #[error("malformed data: {0}")]
    Data(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MlpError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(MlpError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
