// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workbench run state, encoded entirely in the stop annotation.

use crate::constants::annotations;
use crate::error::Result;
use crate::kubernetes::ResourceClient;
use crate::types::{Notebook, WorkbenchStatus};
use crate::workbench::validate_name;
use k8s_openapi::chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::{info, instrument};

/// Outcome of a requested state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub message: String,
    /// False when the workbench was already in the requested state and nothing was sent
    pub changed: bool,
}

pub struct StatusEngine {
    resources: ResourceClient,
}

impl StatusEngine {
    pub fn new(resources: ResourceClient) -> Self {
        Self { resources }
    }

    /// Classify a workbench as running or stopped
    #[instrument(skip(self))]
    pub async fn classify(&self, namespace: &str, name: &str) -> Result<WorkbenchStatus> {
        validate_name("namespace", namespace)?;
        validate_name("workbench name", name)?;

        let notebook: Notebook = self.resources.get(namespace, name).await?;
        Ok(notebook.workbench_status())
    }

    /// Move a workbench into `desired`, sending a patch only when its state differs
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        namespace: &str,
        name: &str,
        desired: WorkbenchStatus,
    ) -> Result<Transition> {
        let current = self.classify(namespace, name).await?;
        if current == desired {
            info!("Workbench {}/{} is already {}", namespace, name, desired);
            return Ok(Transition {
                message: format!("Workbench {} is already {}", name, desired),
                changed: false,
            });
        }

        let patch = status_patch(desired, Utc::now());
        self.resources
            .patch_merge::<Notebook>(namespace, name, &patch)
            .await
            .map_err(|e| e.context(format!("Failed to {} workbench {}", desired.verb(), name)))?;

        info!("Workbench {}/{} is now {}", namespace, name, desired);
        Ok(Transition {
            message: format!("Workbench {} is {}", name, desired),
            changed: true,
        })
    }
}

/// Merge patch that moves a notebook into `desired`: stopping stamps the
/// annotation with `now`, running removes it with an explicit null
pub fn status_patch(desired: WorkbenchStatus, now: DateTime<Utc>) -> Value {
    let value = match desired {
        WorkbenchStatus::Stopped => Value::String(now.to_rfc3339_opts(SecondsFormat::Secs, true)),
        WorkbenchStatus::Running => Value::Null,
    };
    json!({ "metadata": { "annotations": { (annotations::STOPPED): value } } })
}
