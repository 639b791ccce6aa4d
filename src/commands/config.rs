use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::workspace::config::WorkspaceConfig;

#[derive(Parser, Debug)]
pub enum ConfigCommand {
    Show(ShowCommand),
}

impl ConfigCommand {
    pub fn run(&self) -> Result<()> {
        match self {
            ConfigCommand::Show(cmd) => cmd.run(),
        }
    }
}

/// Print the resolved configuration as TOML
#[derive(Parser, Debug)]
pub struct ShowCommand {
    #[clap(short, long)]
    pub file: Option<String>,
}

impl ShowCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.file.as_ref().map(PathBuf::from);
        let config = WorkspaceConfig::load(path.as_ref())?;
        print!("{}", config.to_str()?);
        Ok(())
    }
}
