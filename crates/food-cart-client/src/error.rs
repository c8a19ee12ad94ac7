//! Errors returned by [`CartService`](crate::CartService) implementations.

use thiserror::Error;

/// Errors that can occur while talking to the cart/wishlist backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl ServiceError {
    pub(crate) fn decode(error: impl std::fmt::Display) -> Self {
        Self::Decode(error.to_string())
    }
}
