// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{Result, WorkbenchError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{info, instrument};

/// Create the Kubernetes client every component shares
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig {
        Some(path) => {
            info!("Loading kubeconfig from {}", path.display());
            let kubeconfig = read_kubeconfig(path).await?;
            create_client_from_kubeconfig(&kubeconfig).await
        }
        None => Client::try_default()
            .await
            .map_err(|e| WorkbenchError::KubeconfigError(format!("Failed to infer config: {}", e))),
    }
}

async fn read_kubeconfig(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        WorkbenchError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| WorkbenchError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                WorkbenchError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| WorkbenchError::KubeconfigError(format!("Failed to create client: {}", e)))
}
