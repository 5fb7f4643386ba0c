// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workbench and pod listing, per namespace and across all of them.

use crate::error::Result;
use crate::kubernetes::ResourceClient;
use crate::types::Notebook;
use crate::workbench::validate_name;
use futures::{stream, StreamExt};
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use tracing::{debug, info, instrument, warn};

/// A pod and its reported phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
    pub phase: String,
}

/// Listing outcome for one namespace of an aggregate call
#[derive(Debug)]
pub struct NamespaceReport {
    pub namespace: String,
    pub workbenches: Result<Vec<String>>,
}

pub struct Aggregator {
    resources: ResourceClient,
    concurrency: usize,
}

impl Aggregator {
    /// `concurrency` bounds how many namespaces are listed at once; 1 lists them one by one
    pub fn new(resources: ResourceClient, concurrency: usize) -> Self {
        Self {
            resources,
            concurrency: concurrency.max(1),
        }
    }

    /// Workbench names in one namespace, in API order.
    /// An empty namespace or a missing collection yields no workbenches.
    #[instrument(skip(self))]
    pub async fn list_workbenches(&self, namespace: &str) -> Result<Vec<String>> {
        if namespace.is_empty() {
            debug!("No namespace given, returning no workbenches");
            return Ok(Vec::new());
        }
        validate_name("namespace", namespace)?;

        match self.resources.list::<Notebook>(namespace, None).await {
            Ok(notebooks) => Ok(notebooks.iter().map(|nb| nb.name_any()).collect()),
            Err(e) if e.is_not_found() => {
                debug!("Notebooks not found in {}: {}", namespace, e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Workbenches of every namespace, in namespace enumeration order.
    /// A namespace that cannot be listed is reported inline; only a failure to
    /// enumerate the namespaces themselves is returned as an error.
    #[instrument(skip(self))]
    pub async fn list_all_workbenches(&self) -> Result<Vec<NamespaceReport>> {
        let namespaces = self.resources.list_namespaces().await?;
        info!("Listing workbenches across {} namespaces", namespaces.len());

        let reports: Vec<NamespaceReport> = stream::iter(namespaces)
            .map(|namespace| async move {
                let workbenches = self.list_workbenches(&namespace).await;
                if let Err(e) = &workbenches {
                    warn!("Failed to list workbenches in namespace {}: {}", namespace, e);
                }
                NamespaceReport {
                    namespace,
                    workbenches,
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        Ok(reports)
    }

    /// Pods in one namespace with their phase, in API order
    #[instrument(skip(self))]
    pub async fn list_pods(&self, namespace: &str) -> Result<Vec<PodSummary>> {
        if namespace.is_empty() {
            debug!("No namespace given, returning no pods");
            return Ok(Vec::new());
        }
        validate_name("namespace", namespace)?;

        let pods = match self.resources.list::<Pod>(namespace, None).await {
            Ok(pods) => pods,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(pods
            .iter()
            .map(|pod| PodSummary {
                name: pod.name_any(),
                phase: pod
                    .status
                    .as_ref()
                    .and_then(|s| s.phase.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkbenchError;
    use crate::test_utils::{notebooks_path, MockService};

    fn aggregator(mock: &MockService, concurrency: usize) -> Aggregator {
        Aggregator::new(ResourceClient::new(mock.clone().into_client()), concurrency)
    }

    #[tokio::test]
    async fn test_list_workbenches_filters_by_namespace() {
        let mock = MockService::new()
            .with_notebook("test-ns", "wb-1", None)
            .with_notebook("test-ns", "wb-0", None)
            .with_notebook("other-ns", "wb-other", None);

        let names = aggregator(&mock, 1).list_workbenches("test-ns").await.unwrap();

        assert_eq!(names, vec!["wb-1".to_string(), "wb-0".to_string()]);
    }

    #[tokio::test]
    async fn test_list_workbenches_empty_namespace() {
        let mock = MockService::new().with_notebook("test-ns", "wb-1", None);

        let names = aggregator(&mock, 1).list_workbenches("").await.unwrap();

        assert!(names.is_empty());
        assert!(mock.requests("GET").is_empty());
    }

    #[tokio::test]
    async fn test_list_workbenches_not_found_is_empty() {
        let mock = MockService::new().fail_on("GET", &notebooks_path("gone"), 404);

        let names = aggregator(&mock, 1).list_workbenches("gone").await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_list_workbenches_transport_error() {
        let mock = MockService::new().fail_on("GET", &notebooks_path("ns1"), 500);

        assert!(aggregator(&mock, 1).list_workbenches("ns1").await.is_err());
    }

    async fn assert_isolated_failure(concurrency: usize) {
        let mock = MockService::new()
            .with_namespace("ns1")
            .with_namespace("ns2")
            .with_namespace("ns3")
            .with_namespace("ns4")
            .with_notebook("ns1", "wb-1", None)
            .with_notebook("ns2", "wb-2", None)
            .fail_on("GET", &notebooks_path("ns3"), 500);

        let reports = aggregator(&mock, concurrency).list_all_workbenches().await.unwrap();

        let namespaces: Vec<&str> = reports.iter().map(|r| r.namespace.as_str()).collect();
        assert_eq!(namespaces, vec!["ns1", "ns2", "ns3", "ns4"]);
        assert_eq!(reports[0].workbenches.as_ref().unwrap(), &vec!["wb-1".to_string()]);
        assert_eq!(reports[1].workbenches.as_ref().unwrap(), &vec!["wb-2".to_string()]);
        assert!(reports[2].workbenches.is_err());
        assert!(reports[3].workbenches.as_ref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_isolates_namespace_failure() {
        assert_isolated_failure(1).await;
    }

    #[tokio::test]
    async fn test_list_all_parallel_keeps_order() {
        assert_isolated_failure(4).await;
    }

    #[tokio::test]
    async fn test_list_all_fails_when_namespaces_unavailable() {
        let mock = MockService::new().fail_on("GET", "/api/v1/namespaces", 403);

        assert!(aggregator(&mock, 1).list_all_workbenches().await.is_err());
    }

    #[tokio::test]
    async fn test_list_pods_filters_by_namespace() {
        let mock = MockService::new()
            .with_pod("test-ns", "pod-a", "Running")
            .with_pod("other-ns", "pod-other", "Succeeded");

        let pods = aggregator(&mock, 1).list_pods("test-ns").await.unwrap();

        assert_eq!(
            pods,
            vec![PodSummary {
                name: "pod-a".to_string(),
                phase: "Running".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_pods_empty_namespace() {
        let mock = MockService::new().with_pod("test-ns", "pod-a", "Running");

        let pods = aggregator(&mock, 1).list_pods("").await.unwrap();

        assert!(pods.is_empty());
        assert!(mock.requests("GET").is_empty());
    }

    #[tokio::test]
    async fn test_list_pods_not_found_is_empty() {
        let mock = MockService::new().fail_on("GET", "/api/v1/namespaces/gone/pods", 404);

        let pods = aggregator(&mock, 1).list_pods("gone").await.unwrap();
        assert!(pods.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_namespace_is_rejected_before_listing() {
        let mock = MockService::new();
        let aggregator = aggregator(&mock, 1);

        let err = aggregator.list_workbenches("Bad_NS").await.unwrap_err();
        assert!(matches!(err, WorkbenchError::InvalidInput(_)));

        let err = aggregator.list_pods("Bad_NS").await.unwrap_err();
        assert!(matches!(err, WorkbenchError::InvalidInput(_)));

        assert!(mock.requests("GET").is_empty());
    }

    #[tokio::test]
    async fn test_list_pods_without_phase() {
        let mock = MockService::new().with_object(
            "/api/v1/namespaces/test-ns/pods",
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Pod",
                "metadata": { "name": "pending-pod", "namespace": "test-ns" }
            }),
        );

        let pods = aggregator(&mock, 1).list_pods("test-ns").await.unwrap();
        assert_eq!(pods[0].phase, "Unknown");
    }
}
