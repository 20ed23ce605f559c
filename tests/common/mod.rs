use std::sync::Arc;

use anyhow::{Context, Result};
use expense_api::app::{build_app, AppState};
use expense_api::auth::{generate_jwt, Claims};
use expense_api::config::AppConfig;
use expense_api::database::{ExpenseStore, MemoryExpenseStore};
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Serve the production router over an in-memory store on an ephemeral port
    pub async fn spawn() -> Result<Self> {
        Self::serve(AppConfig::development(), Arc::new(MemoryExpenseStore::new())).await
    }

    /// Serve the router with a caller-supplied config over an in-memory store
    #[allow(dead_code)]
    pub async fn spawn_with_config(config: AppConfig) -> Result<Self> {
        Self::serve(config, Arc::new(MemoryExpenseStore::new())).await
    }

    #[allow(dead_code)]
    pub async fn spawn_with_store(store: Arc<dyn ExpenseStore>) -> Result<Self> {
        Self::serve(AppConfig::development(), store).await
    }

    async fn serve(mut config: AppConfig, store: Arc<dyn ExpenseStore>) -> Result<Self> {
        config.security.jwt_secret = JWT_SECRET.to_string();
        config.api.enable_request_logging = false;

        let app = build_app(AppState::new(config, store));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind ephemeral port")?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn expenses_url(&self, path: &str) -> String {
        format!("{}/api/expenses{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn mint_jwt(user_id: Uuid) -> String {
    let claims = Claims::new(user_id, 1).expect("token expiry overflow");
    generate_jwt(&claims, JWT_SECRET).expect("failed to encode jwt")
}
