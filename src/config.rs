use std::fmt;

use reqwest::Url;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PdnsError, Result};
use crate::powerdns::client::Client;

/// Client settings as they appear in a caller's configuration file.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub url: String, // e.g. "http://127.0.0.1:8081"
    pub api_key: String,
}

impl ClientConfig {
    /// Base URL without surrounding whitespace or a trailing slash.
    pub fn server_root(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Validate the settings and produce a [`Client`].
    pub fn build(&self) -> Result<Client> {
        let root = self.server_root();
        if root.is_empty() {
            return Err(PdnsError::invalid_config("url is empty"));
        }

        let parsed = Url::parse(root)
            .map_err(|e| PdnsError::invalid_config(format!("url '{root}' is not valid: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PdnsError::invalid_config(format!(
                "url '{root}' must use http or https"
            )));
        }
        if parsed.host_str().is_none() {
            return Err(PdnsError::invalid_config(format!("url '{root}' has no host")));
        }

        if self.api_key.is_empty() {
            return Err(PdnsError::invalid_config("api_key is empty"));
        }
        if HeaderValue::from_str(&self.api_key).is_err() {
            return Err(PdnsError::invalid_config(
                "api_key contains characters not allowed in a header",
            ));
        }

        if root.len() != self.url.trim().len() {
            warn!(url = %self.url, "stripped trailing '/' from PowerDNS url");
        }
        debug!(server = %root, "configured PowerDNS client");

        Ok(Client::new(root, self.api_key.as_str()))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
