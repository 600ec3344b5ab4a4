use std::sync::Arc;

use wisdom_sanctuary::cli;
use wisdom_sanctuary::config::SanctuaryConfig;
use wisdom_sanctuary::gateway::{ResponseGateway, create_gateway};

/// Load configuration and build the gateway it selects.
fn setup() -> wisdom_sanctuary::error::Result<(SanctuaryConfig, Arc<dyn ResponseGateway>)> {
    let config = SanctuaryConfig::from_env()?;
    let gateway = create_gateway(&config)?;
    Ok((config, gateway))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (config, gateway) = setup()?;

    eprintln!("🌿 Wisdom Sanctuary v{}", env!("CARGO_PKG_VERSION"));
    if config.offline {
        eprintln!("   Mentors: offline (canned sayings)");
    } else {
        eprintln!("   Mentors: {}/respond", config.backend_url);
        eprintln!("   Timeout: {}s", config.request_timeout.as_secs());
    }
    tracing::info!(gateway = gateway.name(), "Sanctuary ready");

    cli::run(gateway, cli::stdin_lines()).await
}
