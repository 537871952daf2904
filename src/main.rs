//! netbox-cli - Netbox DCIM client for the terminal

mod cli;
mod commands;
mod config;
mod models;
mod netbox;
mod output;
mod pager;
mod render;
mod resource;

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, DcimAction};
use output::{CliError, Output};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // .env must be loaded before clap reads the env bindings
    let env_file = config::load_env();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match env_file {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(e) => warn!("ignoring .env: {}", e),
    }

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let out = Output::new(cli.json, color);

    // If no command provided, show help
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            std::process::exit(1);
        }
    };

    let op = operation(&command);
    let result = match command {
        Commands::Dcim(cmd) => commands::dcim::run(cmd, &cli.connection, &out).await,
        Commands::Status => commands::status::run(&cli.connection, &out).await,
        Commands::Resources => {
            commands::resources::run(&out);
            Ok(())
        }
    };

    if let Err(e) = result {
        out.error(CliError::from_anyhow(&e).with_op(&op));
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "netbox_cli=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .with(filter)
        .init();
}

/// Dotted operation name reported with errors, e.g. `dcim.racks.list`
fn operation(command: &Commands) -> String {
    match command {
        Commands::Dcim(cmd) => {
            let action = match cmd.action {
                DcimAction::List { .. } => "list",
                DcimAction::Get { .. } => "get",
                DcimAction::Patch { .. } => "patch",
            };
            format!("dcim.{}.{}", cmd.resource.name(), action)
        }
        Commands::Status => "status".to_string(),
        Commands::Resources => "resources".to_string(),
    }
}
