use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please enter a reason for the spending")]
    MissingReason,
}
