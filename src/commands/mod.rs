//! Command implementations

pub mod dcim;
pub mod resources;
pub mod status;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::cli::ConnectionArgs;
use crate::config;
use crate::netbox::NetboxClient;

/// Arguments that parsed but make no sense together
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("--data is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("--data must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("nothing to patch; pass --set key=value or --data '{{...}}'")]
    NothingToPatch,
}

/// Resolve connection settings and build the API client
pub fn connect(args: &ConnectionArgs) -> Result<NetboxClient> {
    let config = config::resolve(args)?;
    debug!(url = %config.base_url, verify_tls = config.verify_tls, "connecting");
    NetboxClient::new(&config).context("Failed to set up the Netbox client")
}
