// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbenchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<WorkbenchError>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl WorkbenchError {
    /// Wrap this error with a human readable prefix describing the failed step
    pub fn context(self, context: impl Into<String>) -> Self {
        WorkbenchError::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkbenchError::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, WorkbenchError::AlreadyExists(_))
    }
}

pub type Result<T> = std::result::Result<T, WorkbenchError>;
