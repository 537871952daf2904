//! Netbox REST API plumbing: connector, list envelope and errors

pub mod client;
pub mod error;
pub mod page;

pub use client::{ConnectionConfig, NetboxClient};
pub use error::NetboxError;
pub use page::Page;
