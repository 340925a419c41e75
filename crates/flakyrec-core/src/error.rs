//! Shared error type across flakyrec crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// The backing store failed the call.
    StoreUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Unified error type used by core and server.
///
/// A missing record is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Injected transient failure of the backing store.
    #[error("store fault: the backing store has failed us")]
    StoreFault,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RecordsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RecordsError::StoreFault => ClientCode::StoreUnavailable,
            RecordsError::BadRequest(_) => ClientCode::BadRequest,
            RecordsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RecordsError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_fault_maps_to_store_unavailable() {
        let err = RecordsError::StoreFault;
        assert_eq!(err.client_code().as_str(), "STORE_UNAVAILABLE");
    }

    #[test]
    fn config_errors_map_to_their_codes() {
        assert_eq!(
            RecordsError::UnsupportedVersion.client_code(),
            ClientCode::UnsupportedVersion
        );
        assert_eq!(
            RecordsError::BadRequest("x".into()).client_code().as_str(),
            "BAD_REQUEST"
        );
        assert_eq!(
            RecordsError::Internal("boom".into()).to_string(),
            "internal: boom"
        );
    }
}
