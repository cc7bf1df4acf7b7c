#![cfg(feature = "server")]

use activity_roster::server::{
    create_roster_route, ConfigError, MemoryStorage, RosterHandler, ServerConfig,
};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
pub async fn main() -> Result<(), ConfigError> {
    let config = ServerConfig::parse();
    config.log_config().init()?;

    let catalog = config.load_catalog()?;
    info!(activities = catalog.len(), "Roster initialized");

    let storage = Arc::new(MemoryStorage::new(catalog));
    let app = create_roster_route(RosterHandler::new(storage), &config.static_dir);

    let listener = TcpListener::bind(config.addr).await?;
    info!("Roster server listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
