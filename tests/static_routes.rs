//! Integration tests for the static router surface.
//!
//! Drives `handle_request` directly without a TCP listener, the handler is
//! generic over the request body so a unit body works. Each test builds its
//! own static root under the system temp directory.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use http_body_util::BodyExt;
use hyper::{Request, Response, StatusCode};
use webmaster_site::config::{AppState, Config};
use webmaster_site::handler;

const ENTRY_PAGE: &str = "<html><body>entry page</body></html>";
const ABOUT_PAGE: &str = "<html><body>about page</body></html>";
const STYLESHEET: &str = "body { margin: 0; }";

fn temp_root(prefix: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("{prefix}_{pid}_{nonce}"));
    std::fs::create_dir_all(dir.join("assets")).expect("create temp root");
    std::fs::write(dir.join("index.html"), ENTRY_PAGE).expect("write index");
    std::fs::write(dir.join("about.html"), ABOUT_PAGE).expect("write about");
    std::fs::write(dir.join("assets/site.css"), STYLESHEET).expect("write css");
    dir
}

fn make_state(root: &Path) -> Arc<AppState> {
    let mut cfg = Config::load_from("nonexistent-config").expect("defaults load");
    cfg.site.static_root = root.to_string_lossy().into_owned();
    cfg.logging.access_log = false;
    Arc::new(AppState::new(&cfg))
}

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

async fn get(state: &Arc<AppState>, path: &str) -> Response<http_body_util::Full<hyper::body::Bytes>> {
    let req = Request::builder().method("GET").uri(path).body(()).unwrap();
    handler::handle_request(req, Arc::clone(state), peer())
        .await
        .unwrap()
}

async fn body_string(response: Response<http_body_util::Full<hyper::body::Bytes>>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn existing_file_served_with_content_type() {
    let root = temp_root("wm_it_file");
    let state = make_state(&root);

    let response = get(&state, "/assets/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/css"
    );
    assert_eq!(body_string(response).await, STYLESHEET);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn html_suffix_resolves_page() {
    let root = temp_root("wm_it_suffix");
    let state = make_state(&root);

    for path in ["/about", "/about.html"] {
        let response = get(&state, path).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, ABOUT_PAGE, "path {path}");
    }

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn root_serves_entry_page() {
    let root = temp_root("wm_it_root");
    let state = make_state(&root);

    let response = get(&state, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, ENTRY_PAGE);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn unresolved_path_serves_fallback_not_404() {
    let root = temp_root("wm_it_miss");
    let state = make_state(&root);

    for path in ["/no-such-page", "/deep/nested/miss", "/../../etc/passwd"] {
        let response = get(&state, path).await;
        assert_eq!(response.status(), StatusCode::OK, "path {path}");
        assert_eq!(body_string(response).await, ENTRY_PAGE, "path {path}");
    }

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn head_has_headers_but_no_body() {
    let root = temp_root("wm_it_head");
    let state = make_state(&root);

    let req = Request::builder()
        .method("HEAD")
        .uri("/about")
        .body(())
        .unwrap();
    let response = handler::handle_request(req, Arc::clone(&state), peer())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-length")
            .unwrap()
            .to_str()
            .unwrap(),
        ABOUT_PAGE.len().to_string()
    );
    assert!(body_string(response).await.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn post_is_method_not_allowed() {
    let root = temp_root("wm_it_post");
    let state = make_state(&root);

    let req = Request::builder()
        .method("POST")
        .uri("/api/submit-form")
        .body(())
        .unwrap();
    let response = handler::handle_request(req, Arc::clone(&state), peer())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn etag_round_trip_yields_304() {
    let root = temp_root("wm_it_etag");
    let state = make_state(&root);

    let first = get(&state, "/about").await;
    let etag = first
        .headers()
        .get("etag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let req = Request::builder()
        .method("GET")
        .uri("/about")
        .header("if-none-match", &etag)
        .body(())
        .unwrap();
    let second = handler::handle_request(req, Arc::clone(&state), peer())
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert!(body_string(second).await.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn missing_fallback_degrades_to_builtin_page() {
    let base = std::env::temp_dir().join(format!(
        "wm_it_builtin_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    std::fs::create_dir_all(&base).expect("create empty root");
    let state = make_state(&base);

    let response = get(&state, "/anything").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Webmaster"));

    let _ = std::fs::remove_dir_all(&base);
}

#[tokio::test]
async fn named_page_matches_ahead_of_lookup() {
    let root = temp_root("wm_it_named");
    let mut cfg = Config::load_from("nonexistent-config").expect("defaults load");
    cfg.site.static_root = root.to_string_lossy().into_owned();
    cfg.logging.access_log = false;
    cfg.site
        .pages
        .insert("/company".to_string(), "about.html".to_string());
    let state = Arc::new(AppState::new(&cfg));

    let response = get(&state, "/company").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, ABOUT_PAGE);

    let _ = std::fs::remove_dir_all(&root);
}
