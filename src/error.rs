// File: ./src/error.rs
//! Error taxonomy for the fetch path.
//!
//! Every variant ends in the same terminal `Failed` state of the feed; the
//! renderer only ever shows `Error: {self}`. Navigation problems are not
//! errors here, see `navigation::PdfTarget::Unavailable`.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    #[error("Failed to connect to the server. Status: {status}")]
    ServerUnreachable { status: u16 },

    /// HTTP 200, but the payload's `success` flag was not `true`.
    #[error("Failed to load syllabus data (success == false)")]
    ApiRejected,

    /// A record in `data` had a missing or unparsable `createdAt`,
    /// or was not a JSON object at all.
    #[error("Malformed syllabus record #{index}: {value}")]
    MalformedRecord { index: usize, value: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

