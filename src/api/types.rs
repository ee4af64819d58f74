//! API response types
//!
//! These types are used for JSON serialization in API endpoints.

use serde::{Deserialize, Serialize};

/// Server status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Reference overlay metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayInfoResponse {
    pub width: u32,
    pub height: u32,
}
