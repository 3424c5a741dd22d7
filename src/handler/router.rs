//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body size checks, route
//! matching, dispatching, and the single error-to-response boundary.

use crate::api;
use crate::config::AppState;
use crate::handler::error::HandlerError;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::routing::{self, RouteTarget};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();

    logger::log_headers_count(parts.headers.len(), state.config.logging.show_headers);

    let response = if let Some(resp) = check_body_size(&parts, state.config.http.max_body_size) {
        resp
    } else {
        match routing::match_route(&parts.method, parts.uri.path()) {
            Some(target) if target.expects_body() => match body.collect().await {
                Ok(collected) => dispatch(&parts, &collected.to_bytes(), &state).await,
                Err(e) => error_response(target, &HandlerError::Internal(e.to_string())),
            },
            _ => dispatch(&parts, &Bytes::new(), &state).await,
        }
    };

    if state.config.logging.access_log {
        log_access(&parts, &response, peer_addr, started, &state);
    }

    Ok(response)
}

/// Match and dispatch one request, converting handler errors into the
/// route's error response shape.
pub(crate) async fn dispatch(
    parts: &Parts,
    body: &Bytes,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let Some(target) = routing::match_route(&parts.method, parts.uri.path()) else {
        return unmatched_response(&parts.method);
    };

    let result = match target {
        RouteTarget::EntryPage => static_files::serve_entry_page(&state.config.resources).await,
        RouteTarget::Tree(tree) => {
            static_files::serve_tree(&state.config.resources, tree, parts.uri.path()).await
        }
        RouteTarget::Strings => api::strings::serve(&state.config.resources, parts.uri.query()).await,
        RouteTarget::Upload => api::upload::handle(&state.upload_dir, body).await,
        RouteTarget::SaveTags => api::tags::handle(body),
    };

    result.unwrap_or_else(|err| error_response(target, &err))
}

/// No route matched: POST gets the API wording, everything else the
/// file wording.
fn unmatched_response(method: &Method) -> Response<Full<Bytes>> {
    let message = if *method == Method::POST {
        "API endpoint not found"
    } else {
        "File not found"
    };
    http::text_response(StatusCode::NOT_FOUND, message)
}

/// Convert a handler error into the response shape its route uses:
/// JSON envelopes for the POST API routes, plain text elsewhere.
fn error_response(target: RouteTarget, err: &HandlerError) -> Response<Full<Bytes>> {
    match target {
        RouteTarget::Upload => api::response::failure_response("Upload failed", err),
        RouteTarget::SaveTags => api::response::failure_response("Save failed", err),
        _ => http::text_response(err.status(), &err.to_string()),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(parts: &Parts, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = parts.headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::text_response(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "413 Payload Too Large",
                ))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Build and emit the access log entry for a handled request
fn log_access(
    parts: &Parts,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
    state: &AppState,
) {
    let mut entry = logger::AccessLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = http_version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header_value(parts, "referer");
    entry.user_agent = header_value(parts, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn http_version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
