//! MIME type detection module
//!
//! Maps file extensions to Content-Type values. Unknown extensions
//! return `None` so each static tree can apply its own default.

/// Get MIME Content-Type based on file extension
pub fn guess_content_type(extension: Option<&str>) -> Option<&'static str> {
    match extension {
        // Text
        Some("html" | "htm") => Some("text/html; charset=utf-8"),
        Some("css") => Some("text/css"),
        Some("txt" | "md") => Some("text/plain; charset=utf-8"),
        Some("xml") => Some("application/xml"),

        // JavaScript/WASM
        Some("js" | "mjs") => Some("application/javascript"),
        Some("json") => Some("application/json"),
        Some("wasm") => Some("application/wasm"),

        // Images
        Some("png") => Some("image/png"),
        Some("jpg" | "jpeg") => Some("image/jpeg"),
        Some("gif") => Some("image/gif"),
        Some("svg") => Some("image/svg+xml"),
        Some("ico") => Some("image/x-icon"),
        Some("webp") => Some("image/webp"),

        // Fonts
        Some("woff") => Some("font/woff"),
        Some("woff2") => Some("font/woff2"),
        Some("ttf") => Some("font/ttf"),
        Some("otf") => Some("font/otf"),

        _ => None,
    }
}
