use thiserror::Error;

#[derive(Error, Debug)]
pub enum FukushuError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Sheet bridge error: {0}")]
    Bridge(String),

    #[error("No records to quiz on")]
    EmptyPool,

    #[error("FukushuError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FukushuError {
    fn from(error: std::io::Error) -> Self {
        FukushuError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FukushuError {
    fn from(error: reqwest::Error) -> Self {
        FukushuError::Http(Box::new(error))
    }
}
