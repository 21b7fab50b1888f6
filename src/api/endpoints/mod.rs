//! API endpoint handlers, one module per surface.

pub mod agronomy;
pub mod chat;
pub mod diagnosis;
pub mod health;
pub mod knowledge;

use crate::api::error::ApiError;

/// Run collaborator-bound work off the async executor.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await?)
}
