use derive_more::Display;

/// Failures at the data boundary. Core chart and selection operations are total.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum BoardError {
    #[display(fmt = "Json Error: {}", _0)]
    Json(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Json(err.to_string())
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
