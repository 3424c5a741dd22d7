//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the handlers: response builders,
//! MIME lookup, and query string parsing. Decoupled from specific
//! business logic.

pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used functions
pub use query::query_param;
pub use response::{file_response, text_response};
