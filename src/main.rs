mod config;
mod intent;
mod protocol;
mod response;
mod server;
mod shadow;

use config::SkillConfig;
use intent::handlers::HandlerContext;
use intent::IntentRouter;
use shadow::{IotDataClient, ShadowClient};
use std::sync::Arc;
use tokio::net::TcpListener;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = SkillConfig::from_env();

    info!("Irrigation skill starting: thing={}", config.thing_name);
    info!("  Data endpoint: {}", config.iot_endpoint);
    info!(
        "  Client identity: {}",
        if config.identity.is_some() { "certificate" } else { "none" }
    );

    let shadow = IotDataClient::new(&config.iot_endpoint, config.identity.as_ref())?;
    info!("Shadow backend initialized ({})", shadow.name());

    let listen_addr = config.listen_addr.clone();
    let ctx = HandlerContext::new(Arc::new(shadow), config);
    let app = server::build_router(Arc::new(IntentRouter::new(ctx)));

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Skill endpoint listening on {}", listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
