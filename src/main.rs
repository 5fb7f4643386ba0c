// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use workbench_manager::config::Config;
use workbench_manager::kubernetes::{create_client, ResourceClient};
use workbench_manager::tools::WorkbenchTools;

/// One invocation per input line
#[derive(Debug, Deserialize)]
struct ToolRequest {
    #[serde(default)]
    id: Value,
    tool: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Serialize)]
struct ToolResponse {
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries responses
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting workbench manager");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: image_catalog_namespace={}, namespace_concurrency={}",
        config.image_catalog_namespace, config.namespace_concurrency
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let tools = WorkbenchTools::new(ResourceClient::new(client), &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ToolRequest>(&line) {
            Ok(request) => match tools.call(&request.tool, request.arguments).await {
                Ok(result) => ToolResponse {
                    id: request.id,
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!("Tool {} failed: {}", request.tool, e);
                    ToolResponse {
                        id: request.id,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            },
            Err(e) => {
                error!("Malformed request: {}", e);
                ToolResponse {
                    id: Value::Null,
                    result: None,
                    error: Some(format!("malformed request: {}", e)),
                }
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
