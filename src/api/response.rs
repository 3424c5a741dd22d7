// API response utility functions module

use crate::api::types::FailureResponse;
use crate::handler::error::HandlerError;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response (`application/json`)
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    build_json(status, body, "application/json")
}

/// Build JSON response declaring UTF-8 (`application/json; charset=utf-8`)
pub fn json_response_utf8<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    build_json(status, body, "application/json; charset=utf-8")
}

/// Failure envelope for the POST API routes:
/// `{"success": false, "message": "<prefix>: <error>"}`
pub fn failure_response(prefix: &str, err: &HandlerError) -> Response<Full<Bytes>> {
    let body = FailureResponse {
        success: false,
        message: format!("{prefix}: {err}"),
    };
    json_response(err.status(), &body)
}

fn build_json<T: Serialize>(
    status: StatusCode,
    body: &T,
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    let bytes = Bytes::from(json);
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", bytes.len())
        .body(Full::new(bytes))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}
