//! # Request/Response Logging Middleware
//!
//! Structured logging for every HTTP exchange: method, path, status and
//! latency, keyed by the request ID from [`RequestStamp`].
//!
//! Auth endpoints carry passwords in and tokens out, so their bodies are
//! never logged, and credential-bearing headers are redacted everywhere.

use crate::middleware::mw_req_stamp::RequestStamp;
use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn, Level};

/// Sensitive headers that should not be logged
const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "x-api-key",
    "x-auth-token",
];

/// Endpoints whose request/response bodies must never be logged
pub const SENSITIVE_ENDPOINTS: &[&str] = &[
    "/api/auth/register",
    "/api/auth/login",
];

/// Whether `path` belongs to an endpoint handling credentials.
pub fn is_sensitive_path(path: &str) -> bool {
    SENSITIVE_ENDPOINTS.iter().any(|ep| path.starts_with(ep))
}

/// Header name/value pairs with credential-bearing values masked.
pub fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower.contains(h)) {
                Some((name.to_string(), "***REDACTED***".to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect()
}

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let (request_id, started) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| (s.id.clone(), s.received_at))
        .unwrap_or_else(|| ("unknown".to_string(), Instant::now()));

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let sensitive = is_sensitive_path(&path);

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        sensitive,
        "[REQUEST] {} {}",
        method,
        path
    );
    if tracing::enabled!(Level::DEBUG) {
        let headers = redacted_headers(req.headers());
        debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");
    }

    let response = next.run(req).await;

    let duration = started.elapsed();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_paths_are_sensitive() {
        assert!(is_sensitive_path("/api/auth/login"));
        assert!(is_sensitive_path("/api/auth/register"));
        assert!(!is_sensitive_path("/health"));
    }

    #[test]
    fn test_credential_headers_are_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        headers.insert("cookie", "session=secret".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());

        let logged = redacted_headers(&headers);
        let value_of = |name: &str| {
            logged
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(value_of("authorization"), Some("***REDACTED***"));
        assert_eq!(value_of("cookie"), Some("***REDACTED***"));
        assert_eq!(value_of("content-type"), Some("application/json"));
        assert!(logged.iter().all(|(_, v)| !v.contains("abc.def.ghi")));
    }
}
