//! External text and vision generation collaborators.

pub mod http;
pub mod mock;
pub mod types;

pub use http::*;
pub use mock::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Collaborator unreachable at {0}")]
    Connection(String),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Collaborator returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("API key not configured: {0}")]
    MissingApiKey(String),
}
