//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use homedash_web::ServerConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "HOMEDASH_PORT", default_value = "5005")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// SQLite database file
    #[arg(long, env = "HOMEDASH_DB", default_value = "./data/db.sqlite")]
    pub db: PathBuf,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "./data/serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    println!();
    println!("  {} {}", "Homedash".cyan().bold(), "Server".bold());
    println!();
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}  ws://{}:{}/ws", "WebSocket".green(), args.host, args.port);
    println!("  {}   {}", "Database".green(), args.db.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        db_path: args.db,
    };
    homedash_web::run_server(config).await?;

    Ok(())
}
