// errors.rs
use thiserror::Error;

/// Errors surfaced by the web layer itself (routing, bad input, response building).
/// Backend failures never reach here; they become notices on the page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}
