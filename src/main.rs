use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use expense_api::app::{build_app, AppState};
use expense_api::config::Environment;
use expense_api::database::{DatabaseManager, ExpenseStore, MemoryExpenseStore, PgExpenseStore};
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("expense_api=info,tower_http=info")),
        )
        .init();

    let config = expense_api::config::config().clone();
    tracing::info!("Starting Expense API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must not be empty");
    }

    let bind_addr = config.bind_addr();
    let (store, pool): (Arc<dyn ExpenseStore>, Option<PgPool>) =
        if config.database.url.is_none() && config.environment == Environment::Development {
            tracing::warn!("DATABASE_URL not set; using in-memory expense store");
            (Arc::new(MemoryExpenseStore::new()) as Arc<dyn ExpenseStore>, None)
        } else {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.auto_migrate {
                DatabaseManager::migrate(&pool).await.context("failed to apply schema")?;
            }
            (Arc::new(PgExpenseStore::new(pool.clone())) as Arc<dyn ExpenseStore>, Some(pool))
        };

    let state = AppState::new(config, store);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Expense API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("Expense API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
