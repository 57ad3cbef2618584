//! Request handler module
//!
//! Request dispatch and static page serving for the site surface.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
