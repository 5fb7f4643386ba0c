// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.
//!
//! [`MockService`] keeps objects in memory keyed by their collection path, so a
//! `kube::Client` built from it behaves like a tiny API server: GET returns
//! items or lists (honouring equality label selectors), POST creates or
//! answers 409, PATCH applies a JSON merge patch. Every request is recorded.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// Path segments that address a collection rather than a single object
const COLLECTIONS: &[&str] = &[
    "namespaces",
    "pods",
    "persistentvolumeclaims",
    "notebooks",
    "imagestreams",
];

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<(String, String), u16>,
    requests: Vec<RecordedRequest>,
}

/// A mock HTTP service backed by an in-memory object store
#[derive(Clone, Default)]
pub struct MockService {
    state: Arc<Mutex<MockState>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object into the collection at `collection_path`
    pub fn with_object(self, collection_path: &str, object: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(collection_path.to_string())
            .or_default()
            .push(object);
        self
    }

    pub fn with_namespace(self, name: &str) -> Self {
        self.with_object("/api/v1/namespaces", namespace_json(name))
    }

    pub fn with_notebook(
        self,
        namespace: &str,
        name: &str,
        annotations: Option<BTreeMap<String, String>>,
    ) -> Self {
        self.with_object(
            &notebooks_path(namespace),
            notebook_json(namespace, name, annotations),
        )
    }

    pub fn with_pod(self, namespace: &str, name: &str, phase: &str) -> Self {
        self.with_object(
            &format!("/api/v1/namespaces/{}/pods", namespace),
            pod_json(namespace, name, phase),
        )
    }

    /// Answer every `method` request on exactly `path` with an error status
    pub fn fail_on(self, method: &str, path: &str, status: u16) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert((method.to_string(), path.to_string()), status);
        self
    }

    /// Drop every injected failure, e.g. to exercise a retry
    pub fn clear_failures(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    /// Build a kube Client from this mock service; clones share state
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    /// Requests received so far with the given method
    pub fn requests(&self, method: &str) -> Vec<RecordedRequest> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    /// Current stored copy of the object at `path`
    pub fn object(&self, path: &str) -> Option<Value> {
        let (collection, name) = split_item_path(path)?;
        let state = self.state.lock().unwrap();
        state
            .collections
            .get(collection)?
            .iter()
            .find(|o| object_name(o) == Some(name))
            .cloned()
    }

    fn handle(&self, method: &str, path: &str, query: Option<&str>, body: Option<Value>) -> (u16, Value) {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body: body.clone(),
        });

        if let Some(status) = state.failures.get(&(method.to_string(), path.to_string())) {
            return (*status, status_json(*status, &format!("injected failure for {}", path)));
        }

        match method {
            "GET" if is_collection(path) => {
                let selector = query.and_then(label_selector);
                let items: Vec<Value> = state
                    .collections
                    .get(path)
                    .map(|items| {
                        items
                            .iter()
                            .filter(|o| matches_selector(o, selector.as_deref()))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                (200, list_json(items))
            }
            "GET" => match find_item(&state, path) {
                Some(object) => (200, object.clone()),
                None => (404, not_found_json("object", path)),
            },
            "POST" => {
                let Some(object) = body else {
                    return (400, status_json(400, "missing body"));
                };
                let name = object_name(&object).unwrap_or_default().to_string();
                let items = state.collections.entry(path.to_string()).or_default();
                if items.iter().any(|o| object_name(o) == Some(name.as_str())) {
                    return (409, already_exists_json(&name));
                }
                items.push(object.clone());
                (201, object)
            }
            "PATCH" => {
                let Some((collection, name)) = split_item_path(path) else {
                    return (404, not_found_json("object", path));
                };
                let patch = body.unwrap_or(Value::Null);
                let target = state
                    .collections
                    .get_mut(collection)
                    .and_then(|items| items.iter_mut().find(|o| object_name(o) == Some(name)));
                match target {
                    Some(object) => {
                        merge_patch(object, &patch);
                        (200, object.clone())
                    }
                    None => (404, not_found_json("object", name)),
                }
            }
            _ => (405, status_json(405, "method not allowed")),
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let service = self.clone();
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);

        Box::pin(async move {
            let bytes = req
                .into_body()
                .collect()
                .await
                .map_err(tower::BoxError::from)?
                .to_bytes();
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice::<Value>(&bytes)?)
            };

            let (status, payload) = service.handle(&method, &path, query.as_deref(), body);
            let response = Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string().into_bytes()))?;
            Ok::<_, tower::BoxError>(response)
        })
    }
}

fn is_collection(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|last| COLLECTIONS.contains(&last))
}

fn split_item_path(path: &str) -> Option<(&str, &str)> {
    let (collection, name) = path.rsplit_once('/')?;
    Some((collection, name))
}

fn find_item<'a>(state: &'a MockState, path: &str) -> Option<&'a Value> {
    let (collection, name) = split_item_path(path)?;
    state
        .collections
        .get(collection)?
        .iter()
        .find(|o| object_name(o) == Some(name))
}

fn object_name(object: &Value) -> Option<&str> {
    object.pointer("/metadata/name").and_then(Value::as_str)
}

fn label_selector(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "labelSelector")
        .map(|(_, v)| v.into_owned())
}

/// Equality-only selectors (`k=v,k2=v2`) are enough for the tests
fn matches_selector(object: &Value, selector: Option<&str>) -> bool {
    let Some(selector) = selector else {
        return true;
    };
    selector.split(',').filter(|s| !s.is_empty()).all(|term| {
        let (key, value) = term.split_once('=').unwrap_or((term, ""));
        object
            .pointer("/metadata/labels")
            .and_then(|labels| labels.get(key))
            .and_then(Value::as_str)
            == Some(value)
    })
}

/// RFC 7386 JSON merge patch
fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                map.remove(key);
            } else {
                merge_patch(map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

pub fn notebooks_path(namespace: &str) -> String {
    format!("/apis/kubeflow.org/v1/namespaces/{}/notebooks", namespace)
}

pub fn claims_path(namespace: &str) -> String {
    format!("/api/v1/namespaces/{}/persistentvolumeclaims", namespace)
}

pub fn image_streams_path(namespace: &str) -> String {
    format!("/apis/image.openshift.io/v1/namespaces/{}/imagestreams", namespace)
}

fn list_json(items: Vec<Value>) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "List",
        "metadata": { "resourceVersion": "" },
        "items": items
    })
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
}

pub fn notebook_json(
    namespace: &str,
    name: &str,
    annotations: Option<BTreeMap<String, String>>,
) -> Value {
    let mut metadata = json!({ "name": name, "namespace": namespace });
    if let Some(annotations) = annotations {
        metadata["annotations"] = json!(annotations);
    }
    json!({
        "apiVersion": "kubeflow.org/v1",
        "kind": "Notebook",
        "metadata": metadata,
        "spec": { "template": {} }
    })
}

pub fn pod_json(namespace: &str, name: &str, phase: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": name, "namespace": namespace },
        "status": { "phase": phase }
    })
}

fn status_json(code: u16, message: &str) -> Value {
    let reason = match code {
        400 => "BadRequest",
        403 => "Forbidden",
        404 => "NotFound",
        409 => "Conflict",
        _ => "InternalError",
    };
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
}

/// Create a 404 not found response
fn not_found_json(resource: &str, name: &str) -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
}

fn already_exists_json(name: &str) -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("\"{}\" already exists", name),
        "reason": "AlreadyExists",
        "code": 409
    })
}
