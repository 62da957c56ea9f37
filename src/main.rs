// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use items::{api::http_router, config::ServiceConfig, db, AppState};

#[derive(Parser)]
#[command(name = "item-service")]
#[command(about = "Item resource service over HTTP backed by SQLite")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// SQLite database URL
        #[arg(long)]
        database_url: Option<String>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create the items table and exit
    InitDb {
        /// SQLite database URL
        #[arg(long)]
        database_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = ServiceConfig::from_env();
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or(Commands::Serve {
        database_url: None,
        host: None,
        port: None,
    }) {
        Commands::Serve {
            database_url,
            host,
            port,
        } => {
            if let Some(url) = database_url {
                config.database_url = url;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Commands::InitDb { database_url } => {
            if let Some(url) = database_url {
                config.database_url = url;
            }
            let pool = db::create_pool(&config.database_url, 1).await?;
            db::init_schema(&pool).await?;
            pool.close().await;
            info!("Initialized {}", config.database_url);
            Ok(())
        }
    }
}

async fn serve(config: ServiceConfig) -> Result<()> {
    info!("Starting item service");
    info!("Database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url, config.max_connections).await?;
    db::init_schema(&pool).await?;

    let app_state = Arc::new(AppState::from_pool(pool.clone()));
    let app = http_router(app_state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
