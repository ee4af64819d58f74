//! API route definitions

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, HeaderValue},
    response::{Html, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;

use super::error::ApiError;
use super::shared::SharedStateHandle;
use super::types::*;
use crate::compositor;

/// Embedded upload page HTML
const UPLOAD_HTML: &str = include_str!("upload.html");

/// Multipart framing overhead allowed on top of the image size limit
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the API router with all endpoints
pub fn create_router(state: SharedStateHandle) -> Router {
    let body_limit = state.settings.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        // Upload page at root
        .route("/", get(|| async { Html(UPLOAD_HTML) }))
        // Status endpoint
        .route("/api/status", get(status_handler))
        // Reference overlay preview and metadata
        .route("/api/overlay", get(overlay_png_handler))
        .route("/api/overlay/info", get(overlay_info_handler))
        // Compositing endpoint
        .route("/api/compose", post(compose_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn status_handler(State(state): State<SharedStateHandle>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

async fn overlay_info_handler(State(state): State<SharedStateHandle>) -> Json<OverlayInfoResponse> {
    Json(OverlayInfoResponse {
        width: state.overlay.width(),
        height: state.overlay.height(),
    })
}

/// Serve the reference overlay so the page can show it next to the upload.
async fn overlay_png_handler(State(state): State<SharedStateHandle>) -> Response {
    png_response(state.overlay_png.clone(), None)
}

/// Accept a multipart upload, composite the reference overlay on top,
/// and return the result as a downloadable PNG. Nothing is written to
/// disk and no state outlives the request.
async fn compose_handler(
    State(state): State<SharedStateHandle>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut upload: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        let data = field.bytes().await?;
        if name == "image" {
            if data.len() > state.settings.max_upload_bytes {
                return Err(ApiError::payload_too_large("image exceeds size limit"));
            }
            upload = Some(data);
        }
    }
    let upload = upload.ok_or_else(|| ApiError::bad_request("image field missing"))?;

    // Decode + composite + encode are CPU-bound; keep them off the reactor
    let worker_state = state.clone();
    let png = tokio::task::spawn_blocking(move || {
        let base = compositor::decode_rgba(&upload)?;
        let composited = compositor::compose(&base, &worker_state.overlay)?;
        compositor::encode_png(&composited)
    })
    .await
    .map_err(|e| ApiError::Io(std::io::Error::other(e)))??;

    tracing::debug!(bytes = png.len(), "composited upload");

    Ok(png_response(
        png,
        Some("attachment; filename=\"overlay.png\""),
    ))
}

fn png_response(png: Vec<u8>, disposition: Option<&'static str>) -> Response {
    let mut response = Response::new(Body::from(png));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    if let Some(disposition) = disposition {
        response.headers_mut().insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(disposition),
        );
    }
    response
}
