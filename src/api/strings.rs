// Strings resource handler
// Serves the per-module UI string tables as compact JSON

use crate::api::response;
use crate::config::ResourcesConfig;
use crate::handler::error::HandlerError;
use crate::http::query_param;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;
use tokio::fs;

/// Module selector carried in the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringsModule {
    HeightMap,
    Portrait,
}

impl StringsModule {
    /// Parse the `type` query parameter value.
    pub fn from_type_param(value: &str) -> Option<Self> {
        match value {
            "heightmap" => Some(Self::HeightMap),
            "portrait" => Some(Self::Portrait),
            _ => None,
        }
    }

    /// Strings file backing the module.
    pub fn strings_file(self, resources: &ResourcesConfig) -> &str {
        match self {
            Self::HeightMap => &resources.heightmap_strings,
            Self::Portrait => &resources.portrait_strings,
        }
    }
}

/// Serve `GET /api/strings?type=<module>`.
///
/// The file is parsed and re-serialized so invalid JSON on disk is
/// reported instead of passed through.
pub async fn serve(
    resources: &ResourcesConfig,
    query: Option<&str>,
) -> Result<Response<Full<Bytes>>, HandlerError> {
    let module = query_param(query, "type")
        .and_then(|value| StringsModule::from_type_param(&value))
        .ok_or_else(|| HandlerError::BadRequest("Invalid module type".to_string()))?;

    let path = module.strings_file(resources);
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| HandlerError::Internal(format!("Error reading strings: {e}")))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| HandlerError::Internal(format!("Error reading strings: {e}")))?;

    Ok(response::json_response_utf8(StatusCode::OK, &value))
}
