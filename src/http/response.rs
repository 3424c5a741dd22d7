//! HTTP response building module
//!
//! Builders for the plain responses the server sends, decoupled from
//! handler logic. JSON envelopes live in the API layer.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build a plain text response with the given status.
pub fn text_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = Bytes::from(message.to_owned());
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response carrying file content.
pub fn file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let body = Bytes::from(content);
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
