//! Routing module
//!
//! One table-driven router: an ordered list of (matcher, target) entries
//! evaluated top to bottom, ending in an unconditional fallback.

mod table;

pub use table::{Resolution, RouteTable};
