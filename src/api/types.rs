// API types module
// Request/response bodies for the JSON endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upload request body
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// Destination filename; directory components are stripped before use
    #[serde(default = "default_upload_filename")]
    pub filename: String,
    /// Raw base64, or a `data:<mime>;base64,<payload>` data URL
    #[serde(default)]
    pub data: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_upload_filename() -> String {
    "unnamed.png".to_string()
}

/// Successful upload acknowledgement
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// Destination path as written, upload directory included
    pub path: String,
}

/// Successful save-tags acknowledgement, echoing the payload
#[derive(Debug, Serialize)]
pub struct SaveTagsResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

/// Failure envelope shared by the POST API routes
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}
