//! Store error types.

/// Errors that can occur while querying the readings store.
#[derive(Debug)]
pub enum StoreError {
    /// Store is not configured
    NotConfigured,
    /// Failed to reach the store
    ConnectionError(String),
    /// Store answered with a non-success status
    HttpError(String),
    /// Response body could not be decoded
    DecodeError(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotConfigured => {
                write!(f, "Store not configured. Add store_url to config.")
            }
            StoreError::ConnectionError(e) => write!(f, "Connection error: {}", e),
            StoreError::HttpError(e) => write!(f, "HTTP error: {}", e),
            StoreError::DecodeError(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}
