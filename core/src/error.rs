use crate::validator::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed source document `{document}`: {message}")]
    Shape { document: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn shape(document: &str, message: impl ToString) -> Self {
        CoreError::Shape {
            document: document.to_string(),
            message: message.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
