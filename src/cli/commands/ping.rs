use anyhow::Context;
use clap::Args;
use serde_json::{json, Value};

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct PingArgs {
    #[arg(long, help = "Server base URL (defaults to the configured host and port)")]
    pub url: Option<String>,
}

pub async fn handle(args: PingArgs, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let base_url = args
        .url
        .unwrap_or_else(|| format!("http://{}", config.bind_addr()));
    let health_url = format!("{}/health", base_url.trim_end_matches('/'));

    let response = reqwest::get(&health_url)
        .await
        .with_context(|| format!("failed to reach {}", health_url))?;
    let status = response.status();
    let body: Value = response.json().await.context("health endpoint returned non-JSON")?;

    if !status.is_success() {
        anyhow::bail!("{} reported {} ({})", base_url, status, body["error"]);
    }

    output_success(
        output_format,
        &format!("{} is healthy", base_url),
        Some(json!({ "status": status.as_u16(), "health": body["data"] })),
    )
}
