// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed and descriptor-addressed access to namespaced cluster objects.
//!
//! Every request goes straight to the API server; nothing is cached. API
//! failures are folded into [`WorkbenchError`] so callers can tell a missing
//! object or a name conflict apart from any other transport failure.

use crate::error::{Result, WorkbenchError};
use kube::{
    api::{DynamicObject, ListParams, Patch, PatchParams, PostParams},
    core::{ApiResource, NamespaceResourceScope},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Thin facade over a [`Client`] handed explicitly to every component
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
}

impl ResourceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    #[instrument(skip(self), fields(kind = %kind_of::<K>()))]
    pub async fn get<K>(&self, namespace: &str, name: &str) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| map_api_error(e, &kind_of::<K>(), namespace, name))
    }

    /// List objects in API order, optionally restricted by a label selector
    #[instrument(skip(self), fields(kind = %kind_of::<K>()))]
    pub async fn list<K>(&self, namespace: &str, label_selector: Option<&str>) -> Result<Vec<K>>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&list_params(label_selector))
            .await
            .map_err(|e| map_api_error(e, &kind_of::<K>(), namespace, "*"))?;

        debug!("Listed {} objects in {}", list.items.len(), namespace);
        Ok(list.items)
    }

    /// Create an object; an existing object of the same name yields `AlreadyExists`
    #[instrument(skip(self, object), fields(kind = %kind_of::<K>(), name = %object.name_any()))]
    pub async fn create<K>(&self, namespace: &str, object: &K) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.create(&PostParams::default(), object)
            .await
            .map_err(|e| map_api_error(e, &kind_of::<K>(), namespace, &object.name_any()))
    }

    /// Apply a JSON merge patch; `null` values remove the addressed keys
    #[instrument(skip(self, patch), fields(kind = %kind_of::<K>()))]
    pub async fn patch_merge<K>(
        &self,
        namespace: &str,
        name: &str,
        patch: &serde_json::Value,
    ) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.patch(name, &PatchParams::default(), &Patch::Merge(patch))
            .await
            .map_err(|e| map_api_error(e, &kind_of::<K>(), namespace, name))
    }

    /// List untyped objects addressed by a resource descriptor
    #[instrument(skip(self, resource), fields(kind = %resource.kind))]
    pub async fn list_dynamic(
        &self,
        resource: &ApiResource,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<DynamicObject>> {
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, resource);
        let list = api
            .list(&list_params(label_selector))
            .await
            .map_err(|e| map_api_error(e, &resource.kind, namespace, "*"))?;

        debug!("Listed {} {} objects in {}", list.items.len(), resource.kind, namespace);
        Ok(list.items)
    }
}

fn list_params(label_selector: Option<&str>) -> ListParams {
    match label_selector {
        Some(selector) => ListParams::default().labels(selector),
        None => ListParams::default(),
    }
}

fn kind_of<K>() -> String
where
    K: Resource,
    K::DynamicType: Default,
{
    K::kind(&K::DynamicType::default()).into_owned()
}

/// Fold a kube error into the crate taxonomy, naming the addressed object
pub(crate) fn map_api_error(
    err: kube::Error,
    kind: &str,
    namespace: &str,
    name: &str,
) -> WorkbenchError {
    let target = if namespace.is_empty() {
        format!("{} {}", kind, name)
    } else {
        format!("{} {}/{}", kind, namespace, name)
    };

    match err {
        kube::Error::Api(resp) if resp.code == 404 => WorkbenchError::NotFound(target),
        kube::Error::Api(resp) if resp.code == 409 && resp.reason == "AlreadyExists" => {
            WorkbenchError::AlreadyExists(target)
        }
        other => WorkbenchError::KubeError(other),
    }
}
