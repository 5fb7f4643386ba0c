// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workbench lifecycle: run state, provisioning, and cross-namespace listing.

pub mod aggregate;
pub mod provisioner;
pub mod status;

pub use aggregate::{Aggregator, NamespaceReport, PodSummary};
pub use provisioner::{CreateWorkbenchRequest, Provisioner, WorkbenchPlan};
pub use status::{StatusEngine, Transition};

use crate::error::{Result, WorkbenchError};

/// Reject names the API server would refuse as an RFC 1123 label
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WorkbenchError::InvalidInput(format!("{} must not be empty", field)));
    }
    if value.len() > 63 {
        return Err(WorkbenchError::InvalidInput(format!(
            "{} '{}' is longer than 63 characters",
            field, value
        )));
    }

    let valid_chars = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let alnum_ends = value.starts_with(|c: char| c.is_ascii_alphanumeric())
        && value.ends_with(|c: char| c.is_ascii_alphanumeric());

    if !valid_chars || !alnum_ends {
        return Err(WorkbenchError::InvalidInput(format!(
            "{} '{}' must consist of lowercase alphanumeric characters or '-', and start and end with an alphanumeric character",
            field, value
        )));
    }
    Ok(())
}
