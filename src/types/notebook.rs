// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::annotations;
use k8s_openapi::api::core::v1::PodSpec;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kubeflow Notebook backing a workbench
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "kubeflow.org", version = "v1", kind = "Notebook")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct NotebookSpec {
    #[serde(default)]
    pub template: NotebookTemplateSpec,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotebookTemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<PodSpec>,
}

/// Run state of a workbench, derived from its annotations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkbenchStatus {
    Running,
    Stopped,
}

impl WorkbenchStatus {
    /// Verb used when reporting a failed transition into this state
    pub fn verb(&self) -> &'static str {
        match self {
            WorkbenchStatus::Running => "start",
            WorkbenchStatus::Stopped => "stop",
        }
    }
}

impl fmt::Display for WorkbenchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkbenchStatus::Running => write!(f, "running"),
            WorkbenchStatus::Stopped => write!(f, "stopped"),
        }
    }
}

impl Notebook {
    /// A notebook is stopped while the stop annotation is present, whatever its value
    pub fn is_stopped(&self) -> bool {
        self.annotations().contains_key(annotations::STOPPED)
    }

    pub fn workbench_status(&self) -> WorkbenchStatus {
        if self.is_stopped() {
            WorkbenchStatus::Stopped
        } else {
            WorkbenchStatus::Running
        }
    }
}
