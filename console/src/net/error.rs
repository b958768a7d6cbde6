//! Error taxonomy for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Every façade call resolves to `Ok` or one of these. `Display` is the text
/// shown in page error banners.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, offline, aborted).
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A success body could not be decoded into the expected type.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("invalid request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
