use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Movie collection is empty")]
    EmptyCollection,
    #[error("Movie not found: {id}")]
    NotFound { id: String },
    /// Raw decoder message, passed through to the client as-is.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MovieError>;
