//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, exact-match
//! table lookup and access logging.

use crate::config::AppState;
use crate::fixture::RouteTable;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Uri, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since the body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = dispatch(&req, &state.routes);

    if state.access_log {
        log_access(&req, &response, peer_addr, started, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve a request to its canned response
fn dispatch<B>(req: &Request<B>, routes: &RouteTable) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(req.method()) {
        return resp;
    }

    let target = request_target(req.uri());
    if !routes.contains(target) {
        logger::log_debug(&format!("No route for {target}"));
    }
    http::build_canned_response(routes.lookup(target))
}

/// Only GET is routed; every other method gets 405
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    if *method == Method::GET {
        None
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        Some(http::build_405_response())
    }
}

/// Raw request target used as the table key, query string included
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map_or_else(|| uri.path(), hyper::http::uri::PathAndQuery::as_str)
}

fn log_access<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
    format: &str,
) {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, format);
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
