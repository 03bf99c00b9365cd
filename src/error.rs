//! Error types for release resolution.

use thiserror::Error;

/// Errors that can occur while resolving a release download URL.
///
/// All variants are terminal for the current call: there are no retries and
/// no fallback tags, the error is surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request to the release endpoint could not be completed.
    #[error("request to release endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The release endpoint answered with a non-200 status.
    #[error("release endpoint returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON payload.
    #[error("could not decode release metadata: {0}")]
    Decode(#[source] reqwest::Error),
}
