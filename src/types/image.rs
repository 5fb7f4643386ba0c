// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::core::{ApiResource, GroupVersionKind};
use serde::{Deserialize, Serialize};

/// A selectable notebook image published in the cluster's image catalog
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub struct ImageCatalogEntry {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "url")]
    pub repository_url: String,
    pub versions: Vec<String>,
}

/// Join a repository URL and an optional tag into a single pull reference
pub fn image_reference(repository_url: &str, tag: Option<&str>) -> String {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => format!("{}:{}", repository_url, tag),
        None => repository_url.to_string(),
    }
}

/// Descriptor for OpenShift image streams, which have no typed binding here
pub fn image_stream_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(
        &GroupVersionKind::gvk("image.openshift.io", "v1", "ImageStream"),
        "imagestreams",
    )
}
