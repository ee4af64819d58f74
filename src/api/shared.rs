//! Shared state for API handlers
//!
//! Everything here is immutable after startup: the decoded reference
//! overlay, its pre-encoded PNG form, and the server settings. Each
//! compose request works on its own copies, so concurrent requests
//! never observe each other.

use std::sync::Arc;
use std::time::Instant;

use image::RgbaImage;

use crate::compositor::{self, ComposeError};
use crate::settings::ServerSettings;

/// Immutable state handed to every API handler.
pub struct SharedState {
    /// Reference overlay, decoded to RGBA once at startup
    pub overlay: RgbaImage,
    /// Reference overlay pre-encoded as PNG, for the preview endpoint
    pub overlay_png: Vec<u8>,
    /// Server settings
    pub settings: ServerSettings,
    /// Startup instant, for the status endpoint
    started: Instant,
}

/// Thread-safe handle to the shared state
pub type SharedStateHandle = Arc<SharedState>;

impl SharedState {
    /// Build the shared state from a decoded overlay image.
    ///
    /// Encodes the overlay preview eagerly so a corrupt overlay fails
    /// at startup rather than on the first preview request.
    pub fn new(overlay: RgbaImage, settings: ServerSettings) -> Result<Self, ComposeError> {
        let overlay_png = compositor::encode_png(&overlay)?;
        Ok(Self {
            overlay,
            overlay_png,
            settings,
            started: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
