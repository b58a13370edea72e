use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest error while issuing request: {0}")]
    ClientFetchError(#[from] reqwest::Error),
    #[error("Status code other than success received from API. StatusCode: {0}. Body: {1}")]
    StatusCodeFetchError(reqwest::StatusCode, String),
    #[error("Could not parse response body. Error: {0}")]
    ParseError(#[from] serde_json::Error),
}
