//! Static page serving module
//!
//! Executes a route resolution: reads the resolved file, attaches cache
//! validators, and degrades to the fallback page (and as a last resort a
//! built-in entry page) instead of surfacing an error to the client.

use crate::handler::router::RequestContext;
use crate::http::{cache, mime, response};
use crate::logger;
use crate::routing::{Resolution, RouteTable};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a request path through the route table
pub async fn serve(ctx: &RequestContext<'_>, routes: &RouteTable) -> Response<Full<Bytes>> {
    match routes.resolve(ctx.path) {
        Resolution::Disk(path) => serve_disk_file(ctx, routes, &path).await,
        Resolution::Fallback => serve_fallback(ctx, routes).await,
    }
}

/// Serve a resolved file from disk; a failed read degrades to the fallback
async fn serve_disk_file(
    ctx: &RequestContext<'_>,
    routes: &RouteTable,
    path: &Path,
) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));
            build_static_response(&content, content_type, ctx)
        }
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to read '{}': {e}; serving fallback page",
                path.display()
            ));
            serve_fallback(ctx, routes).await
        }
    }
}

/// Serve the fallback entry page, or the built-in one if the file is gone
async fn serve_fallback(ctx: &RequestContext<'_>, routes: &RouteTable) -> Response<Full<Bytes>> {
    let path = routes.fallback_path();
    match fs::read(&path).await {
        Ok(content) => build_static_response(&content, "text/html; charset=utf-8", ctx),
        Err(e) => {
            logger::log_warning(&format!(
                "Fallback page '{}' unreadable: {e}; serving built-in entry page",
                path.display()
            ));
            response::build_html_response(builtin_entry_page(), ctx.is_head)
        }
    }
}

/// Build a 200/304 response for file content with cache validators
fn build_static_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return response::build_304_response(&etag);
    }

    response::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag, ctx.is_head)
}

/// Minimal entry page served when even the fallback file cannot be read
fn builtin_entry_page() -> String {
    String::from(
        r"<!DOCTYPE html>
<html>
<head>
    <meta charset='utf-8'>
    <meta name='viewport' content='width=device-width, initial-scale=1'>
    <title>Webmaster</title>
</head>
<body>
    <main style='font-family: sans-serif; max-width: 40em; margin: 4em auto;'>
        <h1>Webmaster</h1>
        <p>The site is starting up. Pages are not available yet.</p>
    </main>
</body>
</html>",
    )
}
