// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tool input and output payloads. Doc comments become schema descriptions.

use crate::types::WorkbenchStatus;
use crate::workbench::CreateWorkbenchRequest;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceInput {
    /// the namespace to look in
    #[serde(default)]
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
pub struct NoInput {}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchInput {
    /// the namespace of the workbench
    pub namespace: String,
    /// the name of the workbench
    pub workbench_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeWorkbenchStatusInput {
    /// the namespace of the workbench
    pub namespace: String,
    /// the name of the workbench
    pub workbench_name: String,
    /// the desired status of the workbench
    pub status: WorkbenchStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkbenchInput {
    /// the namespace of the workbench
    pub namespace: String,
    /// the name of the workbench
    pub workbench_name: String,
    /// the image display name - f.e. Jupyter | Data Science | CPU | Python 3.12
    pub image_display_name: String,
    /// the image repository URL as listed in the image catalog
    pub image_url: String,
    /// the image tag
    #[serde(default)]
    pub image_tag: Option<String>,
}

impl From<CreateWorkbenchInput> for CreateWorkbenchRequest {
    fn from(input: CreateWorkbenchInput) -> Self {
        CreateWorkbenchRequest {
            namespace: input.namespace,
            name: input.workbench_name,
            image_url: input.image_url,
            image_tag: input.image_tag.filter(|t| !t.is_empty()),
            image_display_name: input.image_display_name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListImagesInput {
    /// the namespace publishing the image catalog, defaults to the configured one
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptInput {
    /// the namespace for the new workbench
    #[serde(default)]
    pub namespace: String,
    /// the name for the new workbench
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PodsOutput {
    /// the list of pods
    pub pods: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ListWorkbenchesResult {
    /// the list of workbenches
    pub workbenches: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct WorkbenchOutput {
    /// the message with result of workbench change
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ListImagesOutput {
    /// the list of images
    pub images: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOutput {
    /// media type of the contents
    pub mime_type: String,
    /// the resource contents
    pub contents: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PromptOutput {
    /// the prompt text
    pub prompt: String,
}

/// Name, description, and input schema of one tool
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: schemars::schema::RootSchema,
}
