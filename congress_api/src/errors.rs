//! Error types for the API client.

/// Errors that can occur when calling the Congress API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be constructed or the network call failed.
    #[error("request failed")]
    Transport,
    /// The response body was not valid JSON or did not match the expected
    /// envelope shape.
    #[error("failed to decode response")]
    Decode,
}
