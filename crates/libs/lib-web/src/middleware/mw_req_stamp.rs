//! # Request Stamping Middleware
//!
//! Gives every request an ID and an arrival instant. The ID is echoed back in
//! the `X-Request-ID` response header; an incoming `X-Request-ID` is reused
//! when it is a valid header value so callers can correlate their own logs.
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use lib_web::middleware::mw_req_stamp::stamp_req;
//!
//! let app: Router = Router::new()
//!     .route("/health", get(|| async { "OK" }))
//!     .layer(axum::middleware::from_fn(stamp_req));
//! ```

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// Header carrying the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied request ID we accept.
const MAX_CLIENT_ID_LEN: usize = 128;

/// Per-request metadata, stored in request extensions.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    pub id: String,
    pub received_at: Instant,
}

impl RequestStamp {
    fn from_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| !id.is_empty() && id.len() <= MAX_CLIENT_ID_LEN)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            id,
            received_at: Instant::now(),
        }
    }
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_request(&req);
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}
