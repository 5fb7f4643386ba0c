// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Invocable tools: typed payloads in, formatted text out.
//!
//! Components return structured results; this is the only layer that turns
//! them into the text fields callers receive.

pub mod format;
pub mod prompts;
pub mod types;

use crate::catalog::ImageCatalog;
use crate::config::Config;
use crate::error::{Result, WorkbenchError};
use crate::kubernetes::ResourceClient;
use crate::workbench::{Aggregator, Provisioner, StatusEngine};
use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use types::*;

/// All components wired to one shared cluster client
pub struct WorkbenchTools {
    status: StatusEngine,
    provisioner: Provisioner,
    aggregator: Aggregator,
    catalog: ImageCatalog,
}

impl WorkbenchTools {
    pub fn new(resources: ResourceClient, config: &Config) -> Self {
        Self {
            status: StatusEngine::new(resources.clone()),
            provisioner: Provisioner::new(resources.clone(), config.image_catalog_namespace.clone()),
            aggregator: Aggregator::new(resources.clone(), config.namespace_concurrency),
            catalog: ImageCatalog::new(resources, config.image_catalog_namespace.clone()),
        }
    }

    pub async fn list_pods(&self, input: NamespaceInput) -> Result<PodsOutput> {
        let pods = self
            .aggregator
            .list_pods(&input.namespace)
            .await
            .map_err(|e| e.context("Failed to list pods"))?;
        Ok(PodsOutput {
            pods: format::pods(&pods),
        })
    }

    pub async fn list_workbenches(&self, input: NamespaceInput) -> Result<ListWorkbenchesResult> {
        let names = self
            .aggregator
            .list_workbenches(&input.namespace)
            .await
            .map_err(|e| e.context("Failed to list workbenches"))?;
        Ok(ListWorkbenchesResult {
            workbenches: format::workbenches(&names),
        })
    }

    pub async fn list_all_workbenches(&self) -> Result<ListWorkbenchesResult> {
        let reports = self
            .aggregator
            .list_all_workbenches()
            .await
            .map_err(|e| e.context("Failed to list namespaces"))?;
        Ok(ListWorkbenchesResult {
            workbenches: format::namespace_reports(&reports),
        })
    }

    pub async fn get_workbench_status(&self, input: WorkbenchInput) -> Result<WorkbenchOutput> {
        let status = self
            .status
            .classify(&input.namespace, &input.workbench_name)
            .await?;
        Ok(WorkbenchOutput {
            message: format!("Workbench {} is {}", input.workbench_name, status),
        })
    }

    pub async fn change_workbench_status(
        &self,
        input: ChangeWorkbenchStatusInput,
    ) -> Result<WorkbenchOutput> {
        let transition = self
            .status
            .transition(&input.namespace, &input.workbench_name, input.status)
            .await?;
        Ok(WorkbenchOutput {
            message: transition.message,
        })
    }

    pub async fn create_workbench(&self, input: CreateWorkbenchInput) -> Result<WorkbenchOutput> {
        let message = self.provisioner.create(&input.into()).await?;
        Ok(WorkbenchOutput { message })
    }

    pub async fn list_images(&self, input: ListImagesInput) -> Result<ListImagesOutput> {
        let entries = self.catalog.list_images(input.namespace.as_deref()).await?;
        Ok(ListImagesOutput {
            images: format::images(&entries),
        })
    }

    /// The catalog of the configured namespace as a JSON document
    pub async fn read_image_catalog(&self) -> Result<ResourceOutput> {
        let entries = self.catalog.list_images(None).await?;
        Ok(ResourceOutput {
            mime_type: "application/json".to_string(),
            contents: serde_json::to_string(&entries)?,
        })
    }

    /// Invoke a tool by name with JSON arguments, returning its JSON output
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, tool: &str, arguments: Value) -> Result<Value> {
        debug!("Invoking tool with arguments {}", arguments);
        let output = match tool {
            "list_tools" => serde_json::to_value(tool_descriptors())?,
            "list_pods" => serde_json::to_value(self.list_pods(parse(arguments)?).await?)?,
            "list_workbenches" => {
                serde_json::to_value(self.list_workbenches(parse(arguments)?).await?)?
            }
            "list_all_workbenches" => serde_json::to_value(self.list_all_workbenches().await?)?,
            "get_workbench_status" => {
                serde_json::to_value(self.get_workbench_status(parse(arguments)?).await?)?
            }
            "change_workbench_status" => {
                serde_json::to_value(self.change_workbench_status(parse(arguments)?).await?)?
            }
            "create_workbench" => {
                serde_json::to_value(self.create_workbench(parse(arguments)?).await?)?
            }
            "list_images" => serde_json::to_value(self.list_images(parse(arguments)?).await?)?,
            "read_image_catalog" => serde_json::to_value(self.read_image_catalog().await?)?,
            "create_workbench_prompt" => {
                let input: PromptInput = parse(arguments)?;
                serde_json::to_value(PromptOutput {
                    prompt: prompts::create_workbench_prompt(&input.namespace, &input.name),
                })?
            }
            other => {
                return Err(WorkbenchError::InvalidInput(format!("unknown tool '{}'", other)));
            }
        };
        Ok(output)
    }
}

/// Absent arguments are treated as an empty object
fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| WorkbenchError::InvalidInput(format!("invalid arguments: {}", e)))
}

/// Every tool with its JSON input schema
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: "list_pods",
            description: "list the pods in a namespace",
            input_schema: schema_for!(NamespaceInput),
        },
        ToolDescriptor {
            name: "list_workbenches",
            description: "list the workbenches in a given project namespace",
            input_schema: schema_for!(NamespaceInput),
        },
        ToolDescriptor {
            name: "list_all_workbenches",
            description: "list the workbenches of every namespace",
            input_schema: schema_for!(NoInput),
        },
        ToolDescriptor {
            name: "get_workbench_status",
            description: "tell whether a workbench is running or stopped",
            input_schema: schema_for!(WorkbenchInput),
        },
        ToolDescriptor {
            name: "change_workbench_status",
            description: "start or stop a workbench",
            input_schema: schema_for!(ChangeWorkbenchStatusInput),
        },
        ToolDescriptor {
            name: "create_workbench",
            description: "create a workbench with its storage from a catalog image",
            input_schema: schema_for!(CreateWorkbenchInput),
        },
        ToolDescriptor {
            name: "list_images",
            description: "list the notebook images available for workbenches",
            input_schema: schema_for!(ListImagesInput),
        },
        ToolDescriptor {
            name: "read_image_catalog",
            description: "the image catalog as JSON",
            input_schema: schema_for!(NoInput),
        },
        ToolDescriptor {
            name: "create_workbench_prompt",
            description: "instructions for creating a workbench from a suitable image",
            input_schema: schema_for!(PromptInput),
        },
    ]
}
