//! CLI definition using clap

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

use crate::resource::Resource;

#[derive(Parser)]
#[command(name = "netbox-cli")]
#[command(version)]
#[command(about = "Netbox DCIM command-line client")]
#[command(long_about = r#"
netbox-cli - browse and update Netbox DCIM objects from the terminal

Every DCIM endpoint (cables, console ports, device bays, interfaces, racks, ...)
is a resource. Each resource supports:
  list   page through the collection, asking before every further page
  get    show one object by id
  patch  update fields of one object

Connection settings come from flags, environment variables or a .env file
(NETBOX_URL, NETBOX_TOKEN, NETBOX_INSECURE, NETBOX_CA_CERT, NETBOX_TIMEOUT).
"#)]
#[command(after_help = r#"
Examples:

  List interfaces of one device:
    netbox-cli dcim interfaces list --filter device=leaf-03

  Show a rack:
    netbox-cli dcim racks get 11

  Disable an interface:
    netbox-cli dcim interfaces patch 301 --set enabled=false

  Fetch every cable as JSON Lines:
    netbox-cli --json dcim cables list --all

  Supported resources:
    netbox-cli resources
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Machine output (JSON Lines on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Netbox base URL, e.g. https://netbox.example.com
    #[arg(long, env = "NETBOX_URL", global = true)]
    pub url: Option<String>,

    /// Netbox API token
    #[arg(long, env = "NETBOX_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification
    #[arg(
        long,
        env = "NETBOX_INSECURE",
        global = true,
        value_parser = BoolishValueParser::new()
    )]
    pub insecure: bool,

    /// Extra PEM root certificate to trust
    #[arg(long, env = "NETBOX_CA_CERT", global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "NETBOX_TIMEOUT", global = true, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// DCIM endpoints - list, show and update objects
    Dcim(DcimCommand),

    /// Show Netbox version information (connectivity check)
    Status,

    /// List supported DCIM resources
    Resources,
}

// ============ DCIM Commands ============

#[derive(Args)]
pub struct DcimCommand {
    /// Resource to operate on (see `netbox-cli resources`)
    #[arg(value_enum)]
    pub resource: Resource,

    #[command(subcommand)]
    pub action: DcimAction,
}

#[derive(Subcommand)]
pub enum DcimAction {
    /// List objects, page by page
    #[command(after_help = "Examples:
  netbox-cli dcim racks list
  netbox-cli dcim devices list --filter site=ams1 --filter status=active
  netbox-cli dcim cables list --limit 100 --all")]
    List {
        /// Query filter as key=value (repeatable)
        #[arg(short, long = "filter", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,

        /// Page size
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of objects to skip
        #[arg(long)]
        offset: Option<u32>,

        /// Fetch every page without asking
        #[arg(long, conflicts_with = "first_page")]
        all: bool,

        /// Only fetch the first page
        #[arg(long)]
        first_page: bool,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Show one object
    #[command(after_help = "Examples:
  netbox-cli dcim racks get 11")]
    Get {
        /// Object id
        id: u64,
    },

    /// Update fields of one object
    #[command(after_help = "Examples:
  netbox-cli dcim interfaces patch 301 --set enabled=false --set mtu=9000
  netbox-cli dcim devices patch 3 --data '{\"status\": \"planned\"}'")]
    Patch {
        /// Object id
        id: u64,

        /// Field to change as key=value; JSON values are sent as JSON (repeatable)
        #[arg(
            short,
            long = "set",
            value_parser = parse_key_value,
            required_unless_present = "data",
            conflicts_with = "data"
        )]
        set: Vec<(String, String)>,

        /// Complete JSON object to send
        #[arg(long)]
        data: Option<String>,
    },
}

/// Parse `key=value`; the value may itself contain `=`
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
