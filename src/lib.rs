//! Static site server for the Webmaster marketing pages.
//!
//! Resolves every GET request through a table-driven route list with an
//! unconditional single-page fallback: unknown paths serve the entry page
//! instead of a 404.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
