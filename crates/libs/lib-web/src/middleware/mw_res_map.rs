//! # Response Mapping Middleware
//!
//! Marks responses from credential endpoints as uncacheable (they carry
//! tokens or password material) and logs server errors.

use crate::middleware::mw_logging::is_sensitive_path;
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::error;

/// Response mapping middleware.
pub async fn map_res(req: Request, next: Next) -> Response {
    let sensitive = is_sensitive_path(req.uri().path());

    let mut res = next.run(req).await;

    if sensitive {
        res.headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    if res.status().is_server_error() {
        error!("[RESPONSE] Server error: {}", res.status());
    }

    res
}
