mod app;
mod config;
mod handlers;
mod seed;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::{Config, DatabaseLocation},
    state::AppState,
    storage::SqliteRepository,
};

/// Superheroes - REST API for heroes and their powers
#[derive(Parser, Debug)]
#[command(name = "superheroes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "5555", env = "PORT")]
    port: u16,

    /// Database connection string, overrides DB_URI (e.g. sqlite:///app.db)
    #[arg(long)]
    database_uri: Option<String>,

    /// Verbose logging for the service and HTTP layer
    #[arg(long)]
    debug: bool,

    /// Replace the database contents with fixture data and exit
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "superheroes=debug,tower_http=debug"
    } else {
        "superheroes=info,tower_http=info"
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match cli.database_uri.as_deref() {
        Some(uri) => Config::from_uri(uri)?,
        None => Config::from_env()?,
    };

    let repository = Arc::new(open_repository(&config.database).await?);

    if cli.seed {
        let summary = seed::seed(repository.as_ref()).await?;
        tracing::info!(
            heroes = summary.heroes,
            powers = summary.powers,
            hero_powers = summary.hero_powers,
            "Seeded database"
        );
        return Ok(());
    }

    let app = create_app(AppState::new(repository));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Open the SQLite store and apply pending migrations.
async fn open_repository(location: &DatabaseLocation) -> Result<SqliteRepository> {
    let repository = match location {
        DatabaseLocation::File(path) => {
            tracing::info!(path = %path.display(), "Opening SQLite database");
            SqliteRepository::new(path).await?
        }
        DatabaseLocation::Memory => {
            tracing::warn!("Using an in-memory database, data is lost on shutdown");
            SqliteRepository::new_in_memory().await?
        }
    };
    Ok(repository)
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
