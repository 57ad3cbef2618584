//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handler: content types,
//! conditional-request caching, and response builders. No routing or site
//! knowledge lives here.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_405_response, build_413_response, build_options_response,
};
