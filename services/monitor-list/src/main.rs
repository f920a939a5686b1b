//! Monitor list CLI
//!
//! Shows a team's uptime monitors and runs row actions against the backend.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use monitor_list::{load_config, Action, Config, MonitorId};
use tracing::Level;

#[derive(Parser)]
#[command(name = "monitor-list")]
#[command(about = "List uptime monitors and act on them")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show status counts and the monitor table
    List,
    /// Open a monitor's site in the browser
    Open { id: String },
    /// Go to a monitor's detail view
    Details { id: String },
    /// Go to a monitor's configuration view
    Configure { id: String },
    /// Remove a monitor
    Delete {
        id: String,
        /// Confirm the deletion instead of cancelling at the prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::List => Action::List,
            Command::Open { id } => Action::OpenSite(MonitorId::new(id)),
            Command::Details { id } => Action::Details(MonitorId::new(id)),
            Command::Configure { id } => Action::Configure(MonitorId::new(id)),
            Command::Delete { id, yes } => Action::Delete {
                id: MonitorId::new(id),
                confirm: yes,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets()?;

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    let action = args.command.map(Action::from).unwrap_or(Action::List);
    tracing::debug!("Running {:?} against {}", action, config.api.base_url);

    monitor_list::run(config, action).await?;

    Ok(())
}
