// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only view of the notebook image catalog published as image streams.

use crate::constants::{annotations, catalog};
use crate::error::Result;
use crate::kubernetes::ResourceClient;
use crate::types::{image_stream_resource, ImageCatalogEntry};
use crate::workbench::validate_name;
use kube::api::DynamicObject;
use kube::ResourceExt;
use tracing::{debug, instrument};

pub struct ImageCatalog {
    resources: ResourceClient,
    default_namespace: String,
}

impl ImageCatalog {
    pub fn new(resources: ResourceClient, default_namespace: impl Into<String>) -> Self {
        Self {
            resources,
            default_namespace: default_namespace.into(),
        }
    }

    /// Catalog entries in `namespace`, or in the configured catalog namespace when none is given
    #[instrument(skip(self))]
    pub async fn list_images(&self, namespace: Option<&str>) -> Result<Vec<ImageCatalogEntry>> {
        let namespace = namespace
            .filter(|ns| !ns.is_empty())
            .unwrap_or(self.default_namespace.as_str());
        validate_name("namespace", namespace)?;

        let streams = self
            .resources
            .list_dynamic(&image_stream_resource(), namespace, Some(catalog::LABEL_SELECTOR))
            .await
            .map_err(|e| e.context("Failed to list images"))?;

        debug!("Found {} catalog image streams in {}", streams.len(), namespace);
        Ok(streams.iter().map(catalog_entry).collect())
    }
}

/// Read one image stream leniently: missing fields fall back to defaults and
/// unusable tags are skipped without failing the entry
pub fn catalog_entry(stream: &DynamicObject) -> ImageCatalogEntry {
    let display_name = stream
        .annotations()
        .get(annotations::IMAGE_DISPLAY_NAME)
        .cloned()
        .unwrap_or_default();

    let repository_url = stream
        .data
        .pointer("/status/dockerImageRepository")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| catalog::URL_NOT_AVAILABLE.to_string());

    let versions = stream
        .data
        .pointer("/spec/tags")
        .and_then(|v| v.as_array())
        .map(|tags| {
            tags.iter()
                .filter_map(|tag| tag.get("name").and_then(|n| n.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ImageCatalogEntry {
        display_name,
        repository_url,
        versions,
    }
}
