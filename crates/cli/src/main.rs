//! # Zipcast
//!
//! Address-to-weather web service with a ZIP-keyed forecast cache

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use zipcast_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "zipcast")]
#[command(version)]
#[command(about = "Address-to-weather web service with a ZIP-keyed forecast cache")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        cache_ttl_secs = config.cache.ttl_seconds,
        "Configuration loaded"
    );

    let state = di::build_state(&config)?;
    server::start_web_server(&config, state).await
}
