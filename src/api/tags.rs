// Save-tags handler
// Validates the tags payload and echoes it back; nothing is persisted

use crate::api::response;
use crate::api::types::SaveTagsResponse;
use crate::handler::error::HandlerError;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;

/// Serve `POST /api/save-tags`.
pub fn handle(body: &Bytes) -> Result<Response<Full<Bytes>>, HandlerError> {
    let data: Value =
        serde_json::from_slice(body).map_err(|e| HandlerError::Internal(e.to_string()))?;

    let ack = SaveTagsResponse {
        success: true,
        message: "Tags saved successfully".to_string(),
        data,
    };
    Ok(response::json_response_utf8(StatusCode::OK, &ack))
}
