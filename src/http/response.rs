//! HTTP response building module
//!
//! Turns canned fixture responses into hyper responses, plus the few
//! protocol-level responses the dispatcher needs.

use crate::fixture::CannedResponse;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the hyper response for a canned fixture entry
///
/// Headers are written in order: `Content-Type`, `Content-Length`, then the
/// entry's extra headers.
pub fn build_canned_response(canned: &CannedResponse) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(canned.status)
        .header("Content-Type", canned.content_type)
        .header("Content-Length", canned.body.len());

    for (name, value) in &canned.headers {
        builder = builder.header(*name, *value);
    }

    builder
        .body(Full::new(canned.body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(&canned.status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{Profile, RouteTable};

    #[test]
    fn test_canned_headers_in_order() {
        let table = RouteTable::for_profile(Profile::Full);
        let resp = build_canned_response(table.lookup("/arl/header"));

        assert_eq!(resp.status(), 200);
        let names: Vec<_> = resp.headers().keys().map(|k| k.as_str()).collect();
        assert_eq!(names, ["content-type", "content-length", "x-powered-by", "server"]);
        assert_eq!(resp.headers()["x-powered-by"], "ThinkPHP");
        assert_eq!(resp.headers()["server"], "nginx/1.18.0");
    }

    #[test]
    fn test_favicon_content_length() {
        let table = RouteTable::for_profile(Profile::Full);
        let resp = build_canned_response(table.lookup("/favicon.ico"));
        assert_eq!(resp.headers()["content-type"], "image/x-icon");
        assert_eq!(resp.headers()["content-length"], "854");
    }

    #[test]
    fn test_not_found_status() {
        let table = RouteTable::for_profile(Profile::Basic);
        let resp = build_canned_response(table.lookup("/nope"));
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
    }

    #[test]
    fn test_405() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["allow"], "GET");
    }
}
