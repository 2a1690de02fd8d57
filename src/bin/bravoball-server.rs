// ABOUTME: HTTP server binary for the BravoBall training backend
// ABOUTME: Loads configuration, opens the drill catalog, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # `BravoBall` Server Binary
//!
//! ```bash
//! DATABASE_URL=sqlite:./data/bravoball.db cargo run --bin bravoball-server
//! cargo run --bin bravoball-server -- --http-port 9000
//! ```

use anyhow::{Context, Result};
use bravoball_server::{
    config::environment::ServerConfig,
    constants::service_names,
    database::{self, DrillCatalog},
    intelligence::SessionGenerator,
    logging::LoggingConfig,
    resources::ServerResources,
    routes,
};
use clap::Parser;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "bravoball-server")]
#[command(about = "BravoBall training API - drill catalog and session generation")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::BRAVOBALL_SERVER);
    logging.environment = config.environment.to_string();
    logging.init()?;

    info!("Starting BravoBall server");
    info!("{}", config.summary());

    let pool = database::connect(&config.database_url).await?;
    let catalog = DrillCatalog::new(pool);
    catalog.ensure_schema().await?;
    let drill_count = catalog.count_drills().await?;
    if drill_count == 0 {
        warn!("Drill catalog is empty; run seed-drills to load the built-in drills");
    } else {
        info!(drills = drill_count, "Drill catalog ready");
    }

    let generator = SessionGenerator::new(config.session)
        .context("Invalid session generator configuration")?;
    let bind_addr = config.bind_addr();
    let resources = Arc::new(ServerResources::new(catalog, generator, config));
    let app = routes::build_router(resources);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;
    info!("HTTP server listening on {bind_addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("BravoBall server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}
