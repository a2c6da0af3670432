use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudydeskError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Missing session id")]
    MissingSessionId,

    #[error("Unknown chapter: {0}")]
    UnknownChapter(i64),

    #[error("StudydeskError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for StudydeskError {
    fn from(error: std::io::Error) -> Self {
        StudydeskError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for StudydeskError {
    fn from(error: reqwest::Error) -> Self {
        StudydeskError::Reqwest(Box::new(error))
    }
}
