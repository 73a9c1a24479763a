//! Message board server: reads settings, prepares the store, serves the API until shutdown.

use message_board::{
    app_router, apply_migrations, ensure_database_exists, AppState, MemoryMessageStore,
    PgMessageStore, Settings, StoreBackend,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("message_board=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let state = match &settings.backend {
        StoreBackend::Postgres { url, max_connections } => {
            ensure_database_exists(url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(url)
                .await?;
            apply_migrations(&pool, &settings.schema).await?;
            AppState::new(PgMessageStore::new(pool, &settings.schema))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; messages are lost on exit");
            AppState::new(MemoryMessageStore::new())
        }
    };

    let app = app_router(state, &settings);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown requested");
}
