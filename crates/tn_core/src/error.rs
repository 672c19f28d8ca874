use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected upstream response: {0}")]
    UnexpectedResponse(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True when the upstream answered with a non-success status code, as
    /// opposed to a connection failure or a malformed body.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_status())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
