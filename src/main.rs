use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use krii_moderation::config::Config;
use krii_moderation::db::{Access, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting Krii moderation dashboard");

    let service = Store::connect(&config.database_url, Access::Service, None, 10).await?;
    let public = Store::connect(
        &config.public_database_url,
        Access::Public,
        config.public_role.clone(),
        10,
    )
    .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(service.pool()).await?;
        tracing::info!("Migrations applied");
    }

    let addr = SocketAddr::new(config.host, config.port);
    let app = krii_moderation::build_app(service, public, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
