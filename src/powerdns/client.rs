use std::fmt;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Method, Request, Url};

use crate::error::{PdnsError, Result};

/// Header PowerDNS reads the API key from.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Accept value sent with every request.
pub const ACCEPT_VALUE: &str = "text/json";

/// Connection parameters for one PowerDNS API endpoint.
///
/// `server` is the base URL (e.g. `http://127.0.0.1:8081`) and is joined to
/// request paths by plain concatenation, so the caller decides where slashes
/// go. The value is never mutated after construction and can be shared freely
/// between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Client {
    pub server: String,
    pub api_key: String,
}

impl Client {
    pub fn new(server: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            api_key: api_key.into(),
        }
    }

    /// Build, but do not send, a request for `server + path`.
    ///
    /// The resulting header map holds exactly `X-API-Key` and `Accept`.
    /// Nothing else is added, not even `Content-Type` when a body is given.
    pub fn prepare_request(
        &self,
        method: &str,
        path: &str,
        body: Option<Body>,
    ) -> Result<Request> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| PdnsError::invalid_request(format!("invalid HTTP method '{method}'")))?;

        let url = self.url(path)?;

        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| PdnsError::invalid_request("API key is not a valid header value"))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let mut req = Request::new(method, url);
        *req.headers_mut() = headers;
        *req.body_mut() = body;
        Ok(req)
    }

    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.server, path);

        let url = Url::parse(&raw)
            .map_err(|e| PdnsError::invalid_request(format!("malformed URL '{raw}': {e}")))?;

        // The parser normalizes quietly (escapes, dot segments, default ports).
        if url.as_str() != raw {
            return Err(PdnsError::invalid_request(format!(
                "URL '{raw}' is not in canonical form (would be sent as '{url}')"
            )));
        }
        Ok(url)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("server", &self.server)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("http://127.0.0.1:8081", "s3cr3t")
    }

    #[test]
    fn get_servers_request() {
        let c = client();
        let req = c.prepare_request("GET", "/api/v1/servers", None).unwrap();

        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.url().as_str(), format!("{}{}", c.server, "/api/v1/servers"));
        assert_eq!(req.headers()["X-API-Key"], "s3cr3t");
        assert_eq!(req.headers()["Accept"], "text/json");
        assert!(req.body().is_none());
    }

    #[test]
    fn header_set_is_exactly_two_entries() {
        let req = client()
            .prepare_request("GET", "/api/v1/servers", None)
            .unwrap();
        let mut names: Vec<_> = req.headers().keys().map(|k| k.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["accept", "x-api-key"]);
        assert!(req.headers().get("content-type").is_none());
    }

    #[test]
    fn body_is_attached_without_content_type() {
        let req = client()
            .prepare_request(
                "PATCH",
                "/api/v1/servers/localhost/zones/example.com.",
                Some(Body::from(r#"{"rrsets":[]}"#)),
            )
            .unwrap();
        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(
            req.body().and_then(|b| b.as_bytes()),
            Some(br#"{"rrsets":[]}"#.as_slice())
        );
        assert_eq!(req.headers().len(), 2);
    }

    #[test]
    fn api_key_header_is_sensitive() {
        let req = client().prepare_request("GET", "/", None).unwrap();
        assert!(req.headers()["X-API-Key"].is_sensitive());
    }

    #[test]
    fn arbitrary_method_tokens_pass_through() {
        let req = client().prepare_request("PURGE", "/cache", None).unwrap();
        assert_eq!(req.method().as_str(), "PURGE");
    }

    #[test]
    fn path_is_not_normalized() {
        let c = Client::new("http://127.0.0.1:8081/", "k");
        let req = c.prepare_request("GET", "/api/v1/servers", None).unwrap();
        assert_eq!(req.url().path(), "//api/v1/servers");
    }

    #[test]
    fn empty_server_with_space_is_rejected() {
        let c = Client::new("", "k");
        let err = c
            .prepare_request("GET", "/api/v1/servers/local host", None)
            .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn rewritten_paths_are_rejected() {
        let c = client();
        for path in [
            "/api/v1/servers/localhost/zones/a\\b.",
            "/x/../api/v1/servers",
            "/api/v1/servers/localhost/zones/{z}",
            "/api/v1/servers/localhost/zones/b\u{fc}cher.",
            "/api/v1/servers/localhost/zones/a\tb.",
        ] {
            let err = c.prepare_request("GET", path, None).unwrap_err();
            assert!(err.is_invalid_request(), "{path:?} should be rejected");
        }
    }

    #[test]
    fn default_port_in_server_is_rejected() {
        let c = Client::new("http://127.0.0.1:80", "k");
        let err = c.prepare_request("GET", "/api/v1/servers", None).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn percent_encoded_path_passes_through() {
        let req = client()
            .prepare_request("GET", "/api/v1/servers/localhost/zones/a%2Fb.", None)
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://127.0.0.1:8081/api/v1/servers/localhost/zones/a%2Fb."
        );
    }

    #[test]
    fn relative_url_is_rejected() {
        let c = Client::new("", "k");
        let err = c.prepare_request("GET", "/api/v1/servers", None).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn invalid_method_is_rejected() {
        let err = client()
            .prepare_request("GE T", "/api/v1/servers", None)
            .unwrap_err();
        assert!(err.is_invalid_request());

        let err = client().prepare_request("", "/api/v1/servers", None).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let c = Client::new("http://127.0.0.1:8081", "bad\nkey");
        let err = c.prepare_request("GET", "/", None).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn debug_hides_api_key() {
        let rendered = format!("{:?}", client());
        assert!(rendered.contains("127.0.0.1:8081"));
        assert!(!rendered.contains("s3cr3t"));
    }

    #[test]
    fn concurrent_preparation_on_shared_client() {
        let c = client();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let c = &c;
                    s.spawn(move || {
                        let path = format!("/api/v1/servers/srv{i}/zones");
                        let req = c.prepare_request("GET", &path, None).unwrap();
                        (path, req)
                    })
                })
                .collect();

            for h in handles {
                let (path, req) = h.join().unwrap();
                assert_eq!(req.url().as_str(), format!("http://127.0.0.1:8081{path}"));
                assert_eq!(req.headers()["X-API-Key"], "s3cr3t");
            }
        });
        assert_eq!(c, client());
    }
}
