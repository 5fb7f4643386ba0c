// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workbench provisioning.
//!
//! The desired objects are built up front as a [`WorkbenchPlan`] and then
//! submitted in two phases. The storage claim phase tolerates an existing
//! claim, so re-running a creation that failed in the notebook phase picks up
//! where it left off. Nothing is rolled back.

use crate::constants::{annotations, labels, workbench};
use crate::error::Result;
use crate::kubernetes::ResourceClient;
use crate::types::{image_reference, Notebook, NotebookSpec, NotebookTemplateSpec};
use crate::workbench::validate_name;
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EmptyDirVolumeSource, EnvVar, PersistentVolumeClaim,
    PersistentVolumeClaimSpec, PersistentVolumeClaimVolumeSource, PodSpec, ResourceRequirements,
    Volume, VolumeMount, VolumeResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Everything needed to provision one workbench
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkbenchRequest {
    pub namespace: String,
    pub name: String,
    pub image_url: String,
    pub image_tag: Option<String>,
    /// Catalog display name, recorded on the notebook as the last image selection
    pub image_display_name: String,
}

impl CreateWorkbenchRequest {
    pub fn image(&self) -> String {
        image_reference(&self.image_url, self.image_tag.as_deref())
    }
}

/// Desired cluster objects for one workbench
#[derive(Debug, Clone)]
pub struct WorkbenchPlan {
    pub claim: PersistentVolumeClaim,
    pub notebook: Notebook,
}

impl WorkbenchPlan {
    /// `hardware_profile_namespace` is where the default hardware profile lives,
    /// which is the namespace publishing the image catalog
    pub fn new(request: &CreateWorkbenchRequest, hardware_profile_namespace: &str) -> Self {
        Self {
            claim: storage_claim(&request.namespace, &request.name),
            notebook: notebook(request, hardware_profile_namespace),
        }
    }
}

pub struct Provisioner {
    resources: ResourceClient,
    hardware_profile_namespace: String,
}

impl Provisioner {
    pub fn new(resources: ResourceClient, hardware_profile_namespace: impl Into<String>) -> Self {
        Self {
            resources,
            hardware_profile_namespace: hardware_profile_namespace.into(),
        }
    }

    /// Create the storage claim and then the notebook for a new workbench
    #[instrument(skip(self, request), fields(workbench = %format!("{}/{}", request.namespace, request.name)))]
    pub async fn create(&self, request: &CreateWorkbenchRequest) -> Result<String> {
        validate_name("namespace", &request.namespace)?;
        validate_name("workbench name", &request.name)?;

        let plan = WorkbenchPlan::new(request, &self.hardware_profile_namespace);

        self.ensure_storage_claim(&request.namespace, &plan.claim)
            .await
            .map_err(|e| e.context(format!("Failed to create storage claim {}", request.name)))?;

        self.resources
            .create(&request.namespace, &plan.notebook)
            .await
            .map_err(|e| e.context(format!("Failed to create workbench {}", request.name)))?;

        info!("Created workbench with image {}", request.image());
        Ok(format!("Workbench {} was successfully created", request.name))
    }

    /// Create the claim unless one of the same name already exists.
    /// Returns whether a new claim was created.
    #[instrument(skip(self, claim), fields(claim = ?claim.metadata.name))]
    pub async fn ensure_storage_claim(
        &self,
        namespace: &str,
        claim: &PersistentVolumeClaim,
    ) -> Result<bool> {
        match self.resources.create(namespace, claim).await {
            Ok(_) => {
                info!("Storage claim created");
                Ok(true)
            }
            Err(e) if e.is_already_exists() => {
                debug!("Storage claim already exists, reusing it");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Persistent storage claim bound 1:1 to the workbench by name
pub fn storage_claim(namespace: &str, name: &str) -> PersistentVolumeClaim {
    PersistentVolumeClaim {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([(
                labels::DASHBOARD.to_string(),
                "true".to_string(),
            )])),
            ..Default::default()
        },
        spec: Some(PersistentVolumeClaimSpec {
            access_modes: Some(vec![workbench::STORAGE_ACCESS_MODE.to_string()]),
            resources: Some(VolumeResourceRequirements {
                requests: Some(BTreeMap::from([(
                    "storage".to_string(),
                    Quantity(workbench::STORAGE_SIZE.to_string()),
                )])),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Server arguments: fixed port, auth handled by the injected proxy, no quit button
pub fn notebook_args(namespace: &str, name: &str) -> String {
    [
        format!("--ServerApp.port={}", workbench::PORT),
        "--ServerApp.token=''".to_string(),
        "--ServerApp.password=''".to_string(),
        format!("--ServerApp.base_url=/notebook/{}/{}", namespace, name),
        "--ServerApp.quit_button=False".to_string(),
    ]
    .join("\n")
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn fixed_resources() -> ResourceRequirements {
    let shape = BTreeMap::from([
        ("cpu".to_string(), Quantity(workbench::CPU.to_string())),
        ("memory".to_string(), Quantity(workbench::MEMORY.to_string())),
    ]);
    ResourceRequirements {
        limits: Some(shape.clone()),
        requests: Some(shape),
        ..Default::default()
    }
}

fn env_var(name: &str, value: String) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: Some(value),
        ..Default::default()
    }
}

/// Notebook object for the request, deterministic in its inputs
pub fn notebook(request: &CreateWorkbenchRequest, hardware_profile_namespace: &str) -> Notebook {
    let name = request.name.as_str();

    let container = Container {
        name: name.to_string(),
        image: Some(request.image()),
        image_pull_policy: Some("Always".to_string()),
        working_dir: Some(workbench::WORKING_DIR.to_string()),
        ports: Some(vec![ContainerPort {
            container_port: workbench::PORT,
            name: Some(workbench::PORT_NAME.to_string()),
            protocol: Some("TCP".to_string()),
            ..Default::default()
        }]),
        env: Some(vec![
            env_var("NOTEBOOK_ARGS", notebook_args(&request.namespace, name)),
            env_var("JUPYTER_IMAGE", request.image_url.clone()),
        ]),
        resources: Some(fixed_resources()),
        volume_mounts: Some(vec![
            VolumeMount {
                mount_path: workbench::STORAGE_MOUNT_PATH.to_string(),
                name: workbench::STORAGE_VOLUME.to_string(),
                ..Default::default()
            },
            VolumeMount {
                mount_path: workbench::SHM_MOUNT_PATH.to_string(),
                name: workbench::SHM_VOLUME.to_string(),
                ..Default::default()
            },
        ]),
        ..Default::default()
    };

    let pod_spec = PodSpec {
        service_account_name: Some(workbench::SERVICE_ACCOUNT.to_string()),
        enable_service_links: Some(false),
        containers: vec![container],
        volumes: Some(vec![
            Volume {
                name: workbench::STORAGE_VOLUME.to_string(),
                persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
                    claim_name: name.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            Volume {
                name: workbench::SHM_VOLUME.to_string(),
                empty_dir: Some(EmptyDirVolumeSource {
                    medium: Some("Memory".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ]),
        ..Default::default()
    };

    let mut notebook = Notebook::new(
        name,
        NotebookSpec {
            template: NotebookTemplateSpec {
                spec: Some(pod_spec),
            },
        },
    );
    notebook.metadata.namespace = Some(request.namespace.clone());
    notebook.metadata.labels = Some(string_map(&[
        (labels::APP, name),
        (labels::DASHBOARD, "true"),
        (labels::ODH_MANAGED, "true"),
    ]));
    notebook.metadata.annotations = Some(string_map(&[
        (annotations::DISPLAY_NAME, name),
        (annotations::DESCRIPTION, workbench::DESCRIPTION),
        (annotations::INJECT_AUTH, "true"),
        (annotations::LAST_IMAGE_SELECTION, request.image_display_name.as_str()),
        (annotations::HARDWARE_PROFILE_NAME, workbench::HARDWARE_PROFILE),
        (annotations::HARDWARE_PROFILE_NAMESPACE, hardware_profile_namespace),
    ]));
    notebook
}
