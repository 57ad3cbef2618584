// Server module entry point
// Listener setup, accept loop, connection serving, shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used entry points
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
