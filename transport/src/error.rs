use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Unspecified API endpoint")]
    UnspecifiedApi,

    #[error("Unspecified contract address")]
    UnspecifiedContract,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid contract address: {0}")]
    InvalidContractAddress(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Response status code not ok: {0}")]
    StatusCodeNotOk(u16),

    #[error("Query failed with {code}: {message}")]
    QueryFailed { code: String, message: String },

    #[error("Return data not found")]
    ReturnDataNotFound,

    #[error("Base64 decode: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Failed to decode return data: {0}")]
    Decode(#[from] thub_core::error::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::NetworkError(e.to_string())
        }
    }
}

pub type TransportResult<T> = std::result::Result<T, TransportError>;

impl From<TransportError> for thub_core::error::Error {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Decode(e) => e,
            e => Self::TransportError(e.to_string()),
        }
    }
}
