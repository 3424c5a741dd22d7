//! Static file serving module
//!
//! Serves the entry page and the two whitelisted directory trees.
//! Tree paths are canonicalized and must stay inside their root.

use crate::config::ResourcesConfig;
use crate::handler::error::HandlerError;
use crate::http::{self, mime};
use crate::logger;
use crate::routing::StaticTree;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the application entry page.
pub async fn serve_entry_page(
    resources: &ResourcesConfig,
) -> Result<Response<Full<Bytes>>, HandlerError> {
    read_file(Path::new(&resources.entry_file), "text/html").await
}

/// Serve a file from a whitelisted tree.
pub async fn serve_tree(
    resources: &ResourcesConfig,
    tree: StaticTree,
    url_path: &str,
) -> Result<Response<Full<Bytes>>, HandlerError> {
    let root = resources.tree_dir(tree);
    let file_path = resolve_tree_path(Path::new(root), tree.url_prefix(), url_path)
        .ok_or_else(|| HandlerError::NotFound("File not found".to_string()))?;

    let content_type = mime::guess_content_type(file_path.extension().and_then(|e| e.to_str()))
        .unwrap_or(tree.default_content_type());
    read_file(&file_path, content_type).await
}

/// Resolve a URL path against a tree root.
///
/// Security: the candidate and the root are both canonicalized and the
/// candidate must remain inside the root. A missing file cannot
/// canonicalize and also resolves to None.
fn resolve_tree_path(root: &Path, url_prefix: &str, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.strip_prefix(url_prefix)?;

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    let file_path = root.join(relative);

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {url_path} -> {}",
            file_path_canonical.display()
        ));
        return None;
    }

    Some(file_path)
}

/// Read a file and wrap it in a 200 response.
async fn read_file(
    path: &Path,
    content_type: &str,
) -> Result<Response<Full<Bytes>>, HandlerError> {
    match fs::read(path).await {
        Ok(content) => Ok(http::file_response(content, content_type)),
        Err(e) => Err(HandlerError::Internal(format!("Error reading file: {e}"))),
    }
}
