// API module entry
// JSON endpoints behind /api/: string tables, uploads, save-tags echo

pub mod response;
pub mod strings;
pub mod tags;
pub mod types;
pub mod upload;
