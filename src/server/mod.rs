// Server module entry
// Listener setup, connection serving, and shutdown signaling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module keeps its file name via #[path]
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used functions
pub use listener::create_listener;
pub use server_loop::run;
pub use signal::start_signal_handler;
