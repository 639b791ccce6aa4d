use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::workspace::config::WorkspaceConfig;
use crate::workspace::service::ConnectionService;
use crate::workspace::user::AuthenticatedUser;
use anyhow::{Context, Result};

#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Path to the configuration file (defaults to the XDG location, then
    /// the process environment)
    #[clap(short, long)]
    pub file: Option<String>,
    /// Bearer token for the workspace API
    #[clap(short, long, env = "TRE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,
    /// Print the connections as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn run(&self) -> Result<()> {
        // setup logging
        if let Ok(log_level) = std::env::var("TRECONNECT_LOG") {
            setup_logging(&log_level)?;
        }

        let path = self.file.as_ref().map(PathBuf::from);
        let config = WorkspaceConfig::load(path.as_ref())?;
        let service = ConnectionService::new(&config)?;
        let user = AuthenticatedUser::new(self.token.clone());

        let connections = service
            .get_connections(Some(&user))
            .await
            .context("could not list connections")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&connections)?);
        } else if connections.is_empty() {
            println!("No connections available.");
        } else {
            println!("{:<24} {:<16} {:<6} PROTOCOL", "NAME", "ADDRESS", "PORT");
            for (identifier, connection) in &connections {
                let name = connection.config.parameter("azure-resource-id").unwrap_or("-");
                let port = connection.config.parameter("port").unwrap_or("-");
                println!(
                    "{name:<24} {identifier:<16} {port:<6} {}",
                    connection.config.protocol
                );
            }
        }

        Ok(())
    }
}

fn setup_logging(log_level: &str) -> Result<()> {
    let log_dir = crate::get_state_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join(format!(
        "treconnect-debug-{}.log",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    ));

    let log_level = match log_level.to_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    WriteLogger::init(log_level, Config::default(), File::create(&log_file_path)?)?;

    // Log the file location so users know where to find it
    info!("Logging to: {}", log_file_path.display());

    Ok(())
}
