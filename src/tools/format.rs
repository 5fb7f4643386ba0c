// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Human readable text rendering of component results.

use crate::types::ImageCatalogEntry;
use crate::workbench::{NamespaceReport, PodSummary};

pub fn pods(pods: &[PodSummary]) -> String {
    pods.iter()
        .map(|pod| format!("- {} ({})\n", pod.name, pod.phase))
        .collect()
}

pub fn workbenches(names: &[String]) -> String {
    names.iter().map(|name| format!("- {}\n", name)).collect()
}

pub fn namespace_reports(reports: &[NamespaceReport]) -> String {
    reports
        .iter()
        .map(|report| match &report.workbenches {
            Ok(names) if names.is_empty() => {
                format!("Namespace {}: no workbenches\n", report.namespace)
            }
            Ok(names) => format!("Namespace {}:\n{}", report.namespace, workbenches(names)),
            Err(e) => format!("Namespace {}: error: {}\n", report.namespace, e),
        })
        .collect()
}

pub fn images(entries: &[ImageCatalogEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let versions = if entry.versions.is_empty() {
                "none".to_string()
            } else {
                entry.versions.join(", ")
            };
            format!(
                "- {} ({})\n  versions: {}\n",
                entry.display_name, entry.repository_url, versions
            )
        })
        .collect()
}
