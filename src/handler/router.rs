//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path matching
//! and dispatch to the numeric endpoints.

use crate::config::AppState;
use crate::handler::endpoints;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Generic over the body type so tests can drive it with `Full<Bytes>`
/// while the server passes `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes> + Unpin,
{
    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query_string = req.uri().query().unwrap_or("").to_owned();

    // Only GET is routed; everything else falls through to 404
    let response = if method == Method::GET {
        dispatch(&path, &query_string, req.into_body(), &state).await
    } else {
        logger::log_warning(&format!("No route for {method} {path}"));
        http::build_not_found_response()
    };

    if access_log {
        let size = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(response.status(), size);
    }
    Ok(response)
}

/// Static routing table: exact match for /factorial and /mean,
/// prefix match for /fibonacci.
async fn dispatch<B>(
    path: &str,
    query_string: &str,
    body: B,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Unpin,
{
    if path == "/factorial" {
        endpoints::handle_factorial(query_string)
    } else if path.starts_with("/fibonacci") {
        endpoints::handle_fibonacci(path)
    } else if path == "/mean" {
        endpoints::handle_mean(body, state.config.http.max_body_size).await
    } else {
        http::build_not_found_response()
    }
}
