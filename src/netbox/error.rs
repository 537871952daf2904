use thiserror::Error;

/// Failures talking to a Netbox instance
#[derive(Debug, Error)]
pub enum NetboxError {
    #[error("invalid Netbox URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to Netbox failed")]
    Request(#[from] reqwest::Error),

    #[error("Netbox returned HTTP {status} for {url}: {detail}")]
    Status {
        status: u16,
        url: String,
        detail: String,
    },

    #[error("unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("TLS configuration: {0}")]
    Tls(String),
}

impl NetboxError {
    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }
}
