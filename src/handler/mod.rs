//! Request handler module
//!
//! Responsible for request routing dispatch, the shared handler error
//! type, and static file serving.

pub mod error;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
