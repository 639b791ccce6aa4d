use std::path::PathBuf;
use std::sync::LazyLock;

use clap::Parser;

mod commands;
mod workspace;

use anyhow::Result;
use commands::config::ConfigCommand;
use commands::list::ListCommand;
use dirs::{config_dir, home_dir, state_dir};

/// Configuration file path following the XDG Base Directory specification
/// (~/.config/treconnect/config.toml)
static CONFIG_FILE: LazyLock<PathBuf> = LazyLock::new(|| {
    config_dir()
        .unwrap_or_else(|| {
            home_dir()
                .expect("HOME directory must be set to run treconnect")
                .join(".config")
        })
        .join("treconnect")
        .join("config.toml")
});

/// State directory path using the XDG Base Directory specification.
/// Used for logs and other state files.
pub fn get_state_dir() -> PathBuf {
    state_dir()
        .unwrap_or_else(|| {
            home_dir()
                .expect("HOME directory must be set to run treconnect")
                .join(".local")
                .join("state")
        })
        .join("treconnect")
}

#[derive(Parser)]
#[clap(name = "treconnect", bin_name = "treconnect", version, about)]
struct TreconnectApp {
    #[clap(subcommand)]
    command: TreconnectCommand,
}

#[derive(Parser)]
enum TreconnectCommand {
    /// List the remote desktop connections available in the workspace
    List(ListCommand),
    #[clap(subcommand)]
    Config(ConfigCommand),
}

impl TreconnectApp {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            TreconnectCommand::List(cmd) => cmd.run().await,
            TreconnectCommand::Config(cmd) => cmd.run(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = TreconnectApp::parse();
    app.run().await
}
