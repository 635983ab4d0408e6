use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Failed to serialize parameter `{name}`: {source}")]
    Parameter {
        name: String,
        source: serde_json::Error,
    },

    #[error("Statement serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
