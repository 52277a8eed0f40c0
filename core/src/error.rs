use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("truncated input: needed {needed} hex chars, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("integer overflow")]
    Overflow,

    #[error("transport error: {0}")]
    TransportError(String),
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::Malformed(e.to_string())
    }
}

impl From<bech32::Error> for Error {
    fn from(e: bech32::Error) -> Self {
        Error::InvalidAddress(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
