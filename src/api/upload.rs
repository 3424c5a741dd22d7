// Upload handler
// Decodes JSON-wrapped base64 payloads and writes them to the upload directory

use crate::api::response;
use crate::api::types::{UploadRequest, UploadResponse};
use crate::handler::error::HandlerError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::path::Path;
use tokio::fs;

/// Serve `POST /api/upload`.
///
/// Concurrent uploads to the same filename are last-writer-wins.
pub async fn handle(
    upload_dir: &Path,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, HandlerError> {
    let request: UploadRequest =
        serde_json::from_slice(body).map_err(|e| HandlerError::Internal(e.to_string()))?;

    let content = decode_file_data(&request.data).map_err(HandlerError::Internal)?;
    let filename = sanitize_filename(&request.filename)
        .ok_or_else(|| HandlerError::Internal(format!("invalid filename '{}'", request.filename)))?;

    let dest = upload_dir.join(&filename);
    fs::write(&dest, &content)
        .await
        .map_err(|e| HandlerError::Internal(e.to_string()))?;

    let ack = UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        path: dest.display().to_string(),
    };
    Ok(response::json_response(StatusCode::OK, &ack))
}

/// Extract and decode the base64 payload from the `data` field.
///
/// A `data:` URL keeps only what follows the first comma; bare values
/// are decoded as-is.
fn decode_file_data(data: &str) -> Result<Vec<u8>, String> {
    let payload = if data.starts_with("data:") {
        match data.split_once(',') {
            Some((_, encoded)) => encoded,
            None => return Err("data URL has no base64 payload".to_string()),
        }
    } else {
        data
    };
    STANDARD.decode(payload).map_err(|e| e.to_string())
}

/// Reduce a client-supplied filename to its final component.
/// Returns None for names with no usable component ("", ".", "..").
fn sanitize_filename(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .map(|base| base.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_decode_bare_base64() {
        assert_eq!(decode_file_data("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(decode_file_data("").unwrap(), b"");
    }

    #[test]
    fn test_decode_data_url() {
        let decoded = decode_file_data("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode_file_data("data:image/png;base64").is_err());
        assert!(decode_file_data("not|base64!").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("cat.png").as_deref(), Some("cat.png"));
        assert_eq!(
            sanitize_filename("nested/dir/cat.png").as_deref(),
            Some("cat.png")
        );
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("."), None);
        assert_eq!(sanitize_filename(".."), None);
    }

    #[tokio::test]
    async fn test_upload_writes_decoded_file() {
        let tmp = tempfile::tempdir().unwrap();
        let body = Bytes::from(
            r#"{"filename":"cat.png","data":"data:image/png;base64,aGVsbG8="}"#,
        );

        let response = handle(tmp.path(), &body).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ack = response_json(response).await;
        assert_eq!(ack["success"], true);
        assert_eq!(ack["message"], "File uploaded successfully");
        assert!(ack["path"].as_str().unwrap().ends_with("cat.png"));
        assert_eq!(std::fs::read(tmp.path().join("cat.png")).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_upload_defaults_filename_and_data() {
        let tmp = tempfile::tempdir().unwrap();
        let body = Bytes::from("{}");

        let response = handle(tmp.path(), &body).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            std::fs::read(tmp.path().join("unnamed.png")).unwrap(),
            b""
        );
    }

    #[tokio::test]
    async fn test_upload_strips_directory_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let body = Bytes::from(r#"{"filename":"../../escape.txt","data":"aGk="}"#);

        handle(tmp.path(), &body).await.unwrap();

        // The write lands inside the upload directory under the basename
        assert!(tmp.path().join("escape.txt").is_file());
        assert!(!tmp.path().parent().unwrap().join("escape.txt").exists());
    }

    #[tokio::test]
    async fn test_upload_rejects_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let body = Bytes::from("{not json");

        let err = handle(tmp.path(), &body).await.unwrap_err();

        assert!(matches!(err, HandlerError::Internal(_)));
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_base64() {
        let tmp = tempfile::tempdir().unwrap();
        let body = Bytes::from(r#"{"filename":"cat.png","data":"!!!"}"#);

        let err = handle(tmp.path(), &body).await.unwrap_err();

        assert!(matches!(err, HandlerError::Internal(_)));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }
}
