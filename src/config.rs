// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::catalog;
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the published notebook image streams
    pub image_catalog_namespace: String,
    /// How many namespaces are listed at once when aggregating workbenches
    pub namespace_concurrency: usize,
    /// Explicit kubeconfig file; falls back to the default client inference when unset
    pub kubeconfig: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            image_catalog_namespace: catalog::DEFAULT_NAMESPACE.to_string(),
            namespace_concurrency: 1,
            kubeconfig: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_catalog_namespace = lookup("IMAGE_CATALOG_NAMESPACE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| catalog::DEFAULT_NAMESPACE.to_string());

        let namespace_concurrency = match lookup("NAMESPACE_CONCURRENCY") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("NAMESPACE_CONCURRENCY is not a number: {}", raw))?,
            None => 1,
        };
        if namespace_concurrency == 0 {
            bail!("NAMESPACE_CONCURRENCY must be at least 1");
        }

        let kubeconfig = lookup("WORKBENCH_KUBECONFIG")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            image_catalog_namespace,
            namespace_concurrency,
            kubeconfig,
        })
    }
}
