//! HTTP cache control module
//!
//! `ETag` generation and conditional request handling. This is response
//! metadata only; file existence and contents are re-read on every request.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a strong `ETag` for a response body
///
/// Quoted hex digest of a fast content hash, e.g. `"9f3b2c"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let digest = hasher.finish();
    format!("\"{digest:x}\"")
}

/// Check if the client's `If-None-Match` header matches the server's `ETag`
///
/// Handles a single tag, a comma-separated list, and the `*` wildcard.
/// Returns true if the client copy is current (answer 304).
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_shape() {
        let etag = generate_etag(b"<html>entry</html>");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_stability() {
        assert_eq!(generate_etag(b"same page"), generate_etag(b"same page"));
        assert_ne!(generate_etag(b"page a"), generate_etag(b"page b"));
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"xyz\", \"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }
}
