//! Static route table
//!
//! Maps an exact request target to a canned response. The table is built
//! once per profile and never mutated afterwards.

use super::icon::FAVICON;
use super::{index, pages, Profile};
use crate::hash::FaviconDigest;
use hyper::body::Bytes;
use std::collections::HashMap;

pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";
pub const IMAGE_ICON: &str = "image/x-icon";

/// A predetermined response, independent of the request content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    /// Extra headers, in the order they are written
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Bytes,
}

impl CannedResponse {
    fn html(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: TEXT_HTML,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    fn json(body: &'static str) -> Self {
        Self {
            content_type: APPLICATION_JSON,
            ..Self::html(body)
        }
    }

    fn icon() -> Self {
        Self {
            content_type: IMAGE_ICON,
            ..Self::html(Bytes::from_static(&FAVICON))
        }
    }

    fn not_found() -> Self {
        Self::html(pages::NOT_FOUND).with_status(404)
    }

    fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Value of an extra header, matched case-insensitively
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// Route table for one fixture profile
#[derive(Debug, Clone)]
pub struct RouteTable {
    profile: Profile,
    routes: HashMap<&'static str, CannedResponse>,
    not_found: CannedResponse,
    digest: Option<FaviconDigest>,
}

impl RouteTable {
    pub fn for_profile(profile: Profile) -> Self {
        let digest = profile.serves_favicon().then(|| FaviconDigest::of(&FAVICON));
        let mut routes = HashMap::new();

        match profile {
            Profile::Full | Profile::Basic => {
                insert_signature_routes(&mut routes);
                if let Some(digest) = digest {
                    insert_arl_routes(&mut routes, digest);
                }
            }
            Profile::Classic => insert_classic_routes(&mut routes),
        }
        routes.insert(
            "/",
            CannedResponse::html(index::render(profile, digest.map(|d| d.plain))),
        );

        Self {
            profile,
            routes,
            not_found: CannedResponse::not_found(),
            digest,
        }
    }

    /// Response for `target`; unmatched targets get the fixed 404
    pub fn lookup(&self, target: &str) -> &CannedResponse {
        self.routes.get(target).unwrap_or(&self.not_found)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.routes.contains_key(target)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().copied()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Favicon digests, present only when the profile serves the icon
    pub const fn digest(&self) -> Option<FaviconDigest> {
        self.digest
    }
}

/// EHole, Wappalyzer, Goby, Fingers and FingerPrintHub signatures
fn insert_signature_routes(routes: &mut HashMap<&'static str, CannedResponse>) {
    routes.insert(
        "/ehole/shiro",
        CannedResponse::html(pages::EHOLE_SHIRO)
            .with_header("Set-Cookie", "rememberMe=deleteMe; Path=/"),
    );
    routes.insert("/ehole/swagger", CannedResponse::html(pages::EHOLE_SWAGGER));
    routes.insert("/ehole/spring", CannedResponse::json(pages::SPRING_ACTUATOR));
    routes.insert("/ehole/tomcat", CannedResponse::html(pages::EHOLE_TOMCAT));

    routes.insert(
        "/wappalyzer/nginx",
        CannedResponse::html(pages::WAPPALYZER_NGINX).with_header("Server", "nginx/1.18.0"),
    );
    routes.insert(
        "/wappalyzer/php",
        CannedResponse::html(pages::WAPPALYZER_PHP).with_header("X-Powered-By", "PHP/7.4.3"),
    );

    routes.insert("/goby/nacos", CannedResponse::html(pages::GOBY_NACOS));
    routes.insert(
        "/goby/weblogic",
        CannedResponse::html(pages::GOBY_WEBLOGIC).with_status(404),
    );

    routes.insert("/fingers/apache", CannedResponse::html(pages::FINGERS_SWAGGER));
    routes.insert(
        "/fingerprinthub/thinkphp",
        CannedResponse::html(pages::FINGERPRINTHUB_EXAMPLE),
    );
}

/// ARL condition pages (body, header, title, icon_hash) and the icon itself
fn insert_arl_routes(routes: &mut HashMap<&'static str, CannedResponse>, digest: FaviconDigest) {
    routes.insert("/arl/body", CannedResponse::html(pages::ARL_BODY));
    routes.insert(
        "/arl/header",
        CannedResponse::html(pages::ARL_HEADER)
            .with_header("X-Powered-By", "ThinkPHP")
            .with_header("Server", "nginx/1.18.0"),
    );
    routes.insert("/arl/title", CannedResponse::html(pages::ARL_TITLE));
    routes.insert(
        "/arl/icon_hash",
        CannedResponse::html(pages::arl_icon_hash(digest.plain)),
    );
    routes.insert(
        "/arl/combined",
        CannedResponse::html(pages::ARL_COMBINED)
            .with_header("X-Powered-By", "RuoYi")
            .with_header("Server", "nginx"),
    );
    routes.insert("/arl/favicon.ico", CannedResponse::icon());
    routes.insert("/favicon.ico", CannedResponse::icon());
}

fn insert_classic_routes(routes: &mut HashMap<&'static str, CannedResponse>) {
    use pages::classic;

    routes.insert("/wordpress", CannedResponse::html(classic::WORDPRESS));
    routes.insert(
        "/shiro",
        CannedResponse::html(classic::SHIRO).with_header("Set-Cookie", "rememberMe=deleteMe; Path=/"),
    );
    routes.insert("/spring", CannedResponse::json(pages::SPRING_ACTUATOR));
    routes.insert("/swagger", CannedResponse::html(classic::SWAGGER));
    routes.insert(
        "/nginx",
        CannedResponse::html(classic::NGINX).with_header("Server", "nginx/1.18.0"),
    );
    routes.insert("/jquery", CannedResponse::html(classic::JQUERY));
    routes.insert(
        "/php",
        CannedResponse::html(classic::PHP).with_header("X-Powered-By", "PHP/7.4.3"),
    );
    routes.insert(
        "/tomcat",
        CannedResponse::html(classic::TOMCAT).with_header("Server", "Apache-Coyote/1.1"),
    );
    routes.insert(
        "/jenkins",
        CannedResponse::html(classic::JENKINS).with_header("X-Jenkins", "2.319.1"),
    );
    routes.insert("/gitlab", CannedResponse::html(classic::GITLAB));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_str(resp: &CannedResponse) -> &str {
        std::str::from_utf8(&resp.body).unwrap()
    }

    #[test]
    fn test_unknown_path_is_fixed_404() {
        for profile in [Profile::Full, Profile::Basic, Profile::Classic] {
            let table = RouteTable::for_profile(profile);
            let resp = table.lookup("/does-not-exist");
            assert_eq!(resp.status, 404);
            assert_eq!(resp.content_type, TEXT_HTML);
            assert_eq!(body_str(resp), "<h1>404 Not Found</h1>");
            assert!(resp.headers.is_empty());
        }
    }

    #[test]
    fn test_exact_match_only() {
        let table = RouteTable::for_profile(Profile::Full);
        assert!(table.contains("/ehole/shiro"));
        assert!(!table.contains("/ehole/shiro/"));
        assert!(!table.contains("/ehole"));
        assert!(!table.contains("/ehole/shiro?x=1"));
        assert!(!table.contains("/EHOLE/SHIRO"));
    }

    #[test]
    fn test_header_routes() {
        let table = RouteTable::for_profile(Profile::Full);

        let nginx = table.lookup("/wappalyzer/nginx");
        assert_eq!(nginx.status, 200);
        assert_eq!(nginx.header("server"), Some("nginx/1.18.0"));
        assert!(body_str(nginx).contains("Welcome to nginx!"));

        let shiro = table.lookup("/ehole/shiro");
        assert_eq!(shiro.header("Set-Cookie"), Some("rememberMe=deleteMe; Path=/"));

        let php = table.lookup("/wappalyzer/php");
        assert_eq!(php.header("X-Powered-By"), Some("PHP/7.4.3"));

        let combined = table.lookup("/arl/combined");
        assert_eq!(
            combined.headers,
            vec![("X-Powered-By", "RuoYi"), ("Server", "nginx")]
        );
    }

    #[test]
    fn test_weblogic_is_404_page() {
        let table = RouteTable::for_profile(Profile::Basic);
        let resp = table.lookup("/goby/weblogic");
        assert_eq!(resp.status, 404);
        assert!(body_str(resp).contains("Error 404--Not Found"));
    }

    #[test]
    fn test_spring_is_valid_json() {
        let table = RouteTable::for_profile(Profile::Full);
        let resp = table.lookup("/ehole/spring");
        assert_eq!(resp.content_type, APPLICATION_JSON);
        let value: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(value["logback"], "enabled");
        assert_eq!(value["profiles"][0], "default");
    }

    #[test]
    fn test_favicon_routes() {
        let table = RouteTable::for_profile(Profile::Full);
        for path in ["/favicon.ico", "/arl/favicon.ico"] {
            let resp = table.lookup(path);
            assert_eq!(resp.status, 200);
            assert_eq!(resp.content_type, IMAGE_ICON);
            assert_eq!(&resp.body[..], &FAVICON[..]);
        }
        let digest = table.digest().unwrap();
        assert!(body_str(table.lookup("/arl/icon_hash"))
            .contains(&format!("Favicon MMH3 Hash: {}", digest.plain)));
    }

    #[test]
    fn test_basic_profile_drops_arl_and_favicon() {
        let table = RouteTable::for_profile(Profile::Basic);
        assert!(table.paths().all(|p| !p.starts_with("/arl/")));
        assert!(!table.contains("/favicon.ico"));
        assert!(table.digest().is_none());
        assert_eq!(table.len(), 11);
        assert_eq!(RouteTable::for_profile(Profile::Full).len(), 18);
    }

    #[test]
    fn test_classic_profile_routes() {
        let table = RouteTable::for_profile(Profile::Classic);
        assert_eq!(table.len(), 11);
        assert_eq!(table.lookup("/tomcat").header("Server"), Some("Apache-Coyote/1.1"));
        assert_eq!(table.lookup("/jenkins").header("X-Jenkins"), Some("2.319.1"));
        assert_eq!(table.lookup("/ehole/shiro").status, 404);
    }

    #[test]
    fn test_index_links_every_page() {
        for profile in [Profile::Full, Profile::Basic, Profile::Classic] {
            let table = RouteTable::for_profile(profile);
            let index = body_str(table.lookup("/"));
            let links = index::hrefs(index);
            for path in table.paths() {
                if path == "/" || path.ends_with(".ico") {
                    continue;
                }
                assert!(links.contains(&path), "{profile}: index misses {path}");
            }
        }
    }

    #[test]
    fn test_table_is_deterministic() {
        let first = RouteTable::for_profile(Profile::Full);
        let second = RouteTable::for_profile(Profile::Full);
        for path in first.paths() {
            assert_eq!(first.lookup(path), second.lookup(path));
        }
    }
}
