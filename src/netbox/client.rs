//! HTTP connector for the Netbox REST API

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Certificate, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::error::NetboxError;

const USER_AGENT: &str = concat!("netbox-cli/", env!("CARGO_PKG_VERSION"));

/// Prefix of Netbox v2 API tokens, which use the `Bearer` scheme
const V2_TOKEN_PREFIX: &str = "nbt_";

/// Everything needed to reach one Netbox instance
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub base_url: String,
    pub token: String,
    pub verify_tls: bool,
    pub ca_cert: Option<PathBuf>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct NetboxClient {
    http: reqwest::Client,
    base: Url,
    auth: String,
}

impl NetboxClient {
    pub fn new(config: &ConnectionConfig) -> Result<Self, NetboxError> {
        let base = api_root(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls);

        if let Some(path) = &config.ca_cert {
            let pem = std::fs::read(path)
                .map_err(|e| NetboxError::Tls(format!("reading {}: {}", path.display(), e)))?;
            let cert = Certificate::from_pem(&pem)
                .map_err(|e| NetboxError::Tls(format!("parsing {}: {}", path.display(), e)))?;
            builder = builder.add_root_certificate(cert);
        }

        Ok(Self {
            http: builder.build()?,
            base,
            auth: auth_header(&config.token),
        })
    }

    /// URL of an API-relative path such as `dcim/cables/`
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, NetboxError> {
        let mut url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| NetboxError::InvalidUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// URL of a single object under a collection path
    pub fn object(&self, path: &str, id: u64) -> Result<Url, NetboxError> {
        self.endpoint(&format!("{}/{}/", path.trim_end_matches('/'), id), &[])
    }

    /// Resolve a `next` cursor against the configured origin.
    ///
    /// Only the path and query of the cursor are kept, so an instance behind
    /// a proxy that advertises the wrong scheme or host is still reachable.
    pub fn follow(&self, next: &str) -> Result<Url, NetboxError> {
        let cursor = Url::parse(next)
            .or_else(|_| self.base.join(next))
            .map_err(|e| NetboxError::InvalidUrl {
                url: next.to_string(),
                reason: e.to_string(),
            })?;

        let mut url = self.base.clone();
        url.set_path(cursor.path());
        url.set_query(cursor.query());
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, NetboxError> {
        self.send(Method::GET, url, Option::<&()>::None).await
    }

    pub async fn patch_json<B, T>(&self, url: Url, body: &B) -> Result<T, NetboxError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, url, Some(body)).await
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, NetboxError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, %url, "netbox request");

        let mut request = self
            .http
            .request(method, url.clone())
            .header(AUTHORIZATION, &self.auth)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(status = status.as_u16(), bytes = text.len(), "netbox response");

        if !status.is_success() {
            return Err(NetboxError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                detail: error_detail(&text),
            });
        }

        serde_json::from_str(&text).map_err(|source| NetboxError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Normalize a user supplied base URL to the API root.
///
/// `https://nb.example.com`, `https://nb.example.com/` and
/// `https://nb.example.com/api` all become `https://nb.example.com/api/`.
pub fn api_root(raw: &str) -> Result<Url, NetboxError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let root = if trimmed.ends_with("/api") {
        format!("{}/", trimmed)
    } else {
        format!("{}/api/", trimmed)
    };

    let url = Url::parse(&root).map_err(|e| NetboxError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(NetboxError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    Ok(url)
}

fn auth_header(token: &str) -> String {
    let token = token.trim();
    if token.starts_with(V2_TOKEN_PREFIX) {
        format!("Bearer {}", token)
    } else {
        format!("Token {}", token)
    }
}

/// Human readable reason from a Netbox error body
fn error_detail(body: &str) -> String {
    if body.trim().is_empty() {
        return "empty response body".to_string();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail").and_then(|d| d.as_str()) {
            Some(detail) => detail.to_string(),
            None => truncate(&serde_json::Value::Object(map).to_string()),
        },
        Ok(other) => truncate(&other.to_string()),
        Err(_) => truncate(body.trim()),
    }
}

fn truncate(text: &str) -> String {
    const LIMIT: usize = 200;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let cut: String = text.chars().take(LIMIT).collect();
        format!("{}...", cut)
    }
}
