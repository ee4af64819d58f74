//! Aura Overlay
//!
//! A small web service that composites a fixed reference "aura"
//! overlay onto an uploaded PNG image. The compositing core is a pure
//! function; the rest is an axum shell around it.

pub mod api;
pub mod compositor;
pub mod settings;
pub mod telemetry;

pub use api::{create_router, run_server, SharedState, SharedStateHandle};
pub use compositor::{compose, decode_rgba, encode_png, ComposeError, Dimensions, ResizePlan};
pub use settings::ServerSettings;
