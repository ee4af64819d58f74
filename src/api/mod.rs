//! REST API for the overlay service
//!
//! Serves the upload page, the reference overlay preview, and the
//! compose endpoint that returns the composited PNG.

pub mod error;
pub mod routes;
pub mod server;
pub mod shared;
pub mod types;

pub use error::ApiError;
pub use routes::create_router;
pub use server::run_server;
pub use shared::{SharedState, SharedStateHandle};
pub use types::*;
