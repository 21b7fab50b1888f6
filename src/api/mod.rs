//! HTTP API.
//!
//! Exposes the knowledge base, the diagnosis pipeline, the chat advisor
//! and the agronomy tools as JSON endpoints under `/api/`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::serve;
pub use types::ApiContext;
