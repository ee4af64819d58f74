//! Overlay compositor
//!
//! The logical core of the service: pure functions that decode raster
//! images to RGBA, plan aspect-ratio-aware resizes for a base/overlay
//! pair, and produce a new composited image. Nothing in this module
//! touches the filesystem or holds state between calls.

mod compose;
mod raster;
mod resize;

pub use compose::compose;
pub use raster::{decode_rgba, encode_png};
pub use resize::{Dimensions, ResizePlan};

use thiserror::Error;

/// Errors produced by the compositor.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Input bytes could not be parsed as a raster image
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The composited result could not be encoded as PNG
    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// A resize target (or input) has a zero width or height
    #[error("invalid image geometry: {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },
}
