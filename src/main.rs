//! Wellness DAO site server binary.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use wellness_site::config::loader::load_config;
use wellness_site::{pages, HttpServer, RouteTable, Shutdown, SiteConfig};

#[derive(Parser)]
#[command(name = "wellness-site", about = "Server-rendered Wellness DAO marketing site")]
struct Args {
    /// Path to a TOML config file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Validate configuration and route registrations, then exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    let table = RouteTable::build(pages::routes()?)?;

    if args.check {
        println!("configuration OK");
        return Ok(());
    }

    wellness_site::observability::logging::init(&config.observability);

    tracing::info!("wellness-site v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        dev_mode = config.site.dev_mode,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config, table);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
