//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use homedash_client::ApiClient;

pub mod apps;
pub mod serve;
pub mod watch;

/// Homedash - a self-hosted dashboard of app shortcuts
#[derive(Parser)]
#[command(name = "homedash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of a running server (for client commands)
    #[arg(
        long,
        global = true,
        env = "HOMEDASH_URL",
        default_value = homedash_client::api::DEFAULT_BASE_URL
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server and push channel
    Serve(serve::ServeArgs),

    /// Manage app shortcuts on a running server
    #[command(subcommand)]
    Apps(apps::AppCommands),

    /// Print push notifications from a running server
    Watch(watch::WatchArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Apps(cmd) => apps::execute(cmd, ApiClient::new(&self.url)).await,
            Commands::Watch(args) => watch::execute(args, ApiClient::new(&self.url)).await,
        }
    }
}
