// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace enumeration

use crate::error::Result;
use crate::kubernetes::resources::{map_api_error, ResourceClient};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, ResourceExt};
use tracing::{debug, instrument};

impl ResourceClient {
    /// Names of every namespace visible to the client, fetched fresh on each call
    #[instrument(skip(self))]
    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        let namespaces: Api<Namespace> = Api::all(self.client().clone());
        let list = namespaces
            .list(&ListParams::default())
            .await
            .map_err(|e| map_api_error(e, "Namespace", "", "*"))?;

        let names: Vec<String> = list.items.iter().map(|ns| ns.name_any()).collect();
        debug!("Found {} namespaces", names.len());
        Ok(names)
    }
}
