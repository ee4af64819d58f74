//! Runtime configuration for the overlay service.
//!
//! All settings come from the environment with sensible defaults;
//! nothing is persisted.

use std::path::PathBuf;

/// Server settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Port the API server binds to
    pub port: u16,
    /// Path to the reference overlay PNG
    pub overlay_path: PathBuf,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8780,
            overlay_path: PathBuf::from("assets/aura.png"),
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl ServerSettings {
    /// Resolve settings from the environment.
    ///
    /// Recognized variables: `AURA_PORT`, `AURA_OVERLAY`,
    /// `AURA_MAX_UPLOAD_BYTES`. Unparseable values log a warning and
    /// fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match std::env::var("AURA_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("AURA_PORT is not a valid port: {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let overlay_path = std::env::var("AURA_OVERLAY")
            .map(PathBuf::from)
            .unwrap_or(defaults.overlay_path);

        let max_upload_bytes = match std::env::var("AURA_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "AURA_MAX_UPLOAD_BYTES is not a valid size: {:?}, using {}",
                    raw,
                    defaults.max_upload_bytes
                );
                defaults.max_upload_bytes
            }),
            Err(_) => defaults.max_upload_bytes,
        };

        Self {
            port,
            overlay_path,
            max_upload_bytes,
        }
    }
}
