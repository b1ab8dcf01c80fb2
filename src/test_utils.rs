// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes HTTP backend and an in-memory resource store.

use crate::error::{KlusterError, Result};
use crate::kubernetes::{CreateOutcome, ResourceClient};
use crate::types::{Kluster, KlusterSpec};
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::{Client, ResourceExt};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service as TowerService;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Number of requests received for a method and exact path
    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerService<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        self.requests.lock().unwrap().push((method, path.clone()));

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, not_found_json("path", &path)));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(409, "AlreadyExists", &format!("{} \"{}\" already exists", resource, name))
}

/// Create a 500 internal error response
pub fn server_error_json() -> String {
    status_json(500, "InternalError", "etcdserver: request timed out")
}

/// Create a KlusterList response from (name, replicas) pairs
pub fn kluster_list_json(items: &[(&str, i32)]) -> String {
    let items: Vec<_> = items
        .iter()
        .map(|(name, replicas)| {
            serde_json::json!({
                "apiVersion": "pulok.dev/v1alpha1",
                "kind": "Kluster",
                "metadata": { "name": name, "namespace": "default" },
                "spec": { "replicas": replicas, "image": "repo/bookapi:v1", "port": 0 }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": "pulok.dev/v1alpha1",
        "kind": "KlusterList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

pub fn make_kluster(name: &str, replicas: i32, image: &str, port: i32) -> Kluster {
    Kluster {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        spec: KlusterSpec {
            replicas,
            image: image.to_string(),
            port,
        },
    }
}

pub fn with_labels(mut meta: ObjectMeta, labels: &[(&str, &str)]) -> ObjectMeta {
    meta.labels = Some(
        labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    );
    meta
}

#[derive(Default)]
struct FakeState {
    deployments: BTreeMap<String, Deployment>,
    services: BTreeMap<String, Service>,
    klusters: Vec<Kluster>,
    fail_creates: bool,
    fail_list: bool,
    create_calls: usize,
    list_calls: usize,
}

/// In-memory [`ResourceClient`] that behaves like the API server for creates:
/// an object whose name is taken is left untouched and reported as existing.
#[derive(Clone, Default)]
pub struct FakeClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_klusters(self, klusters: Vec<Kluster>) -> Self {
        self.state.lock().unwrap().klusters = klusters;
        self
    }

    pub fn failing_creates(self) -> Self {
        self.state.lock().unwrap().fail_creates = true;
        self
    }

    pub fn failing_list(self) -> Self {
        self.state.lock().unwrap().fail_list = true;
        self
    }

    pub fn insert_deployment(&self, deployment: Deployment) {
        self.state
            .lock()
            .unwrap()
            .deployments
            .insert(deployment.name_any(), deployment);
    }

    pub fn remove_deployment(&self, name: &str) -> Option<Deployment> {
        self.state.lock().unwrap().deployments.remove(name)
    }

    pub fn remove_service(&self, name: &str) -> Option<Service> {
        self.state.lock().unwrap().services.remove(name)
    }

    pub fn deployment(&self, name: &str) -> Option<Deployment> {
        self.state.lock().unwrap().deployments.get(name).cloned()
    }

    pub fn service(&self, name: &str) -> Option<Service> {
        self.state.lock().unwrap().services.get(name).cloned()
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }
}

fn injected_failure() -> KlusterError {
    KlusterError::KubeError(kube::Error::Api(kube::error::ErrorResponse {
        status: "Failure".to_string(),
        message: "etcdserver: request timed out".to_string(),
        reason: "InternalError".to_string(),
        code: 500,
    }))
}

fn insert_if_absent<K: Clone>(map: &mut BTreeMap<String, K>, name: String, obj: &K) -> CreateOutcome {
    if map.contains_key(&name) {
        CreateOutcome::AlreadyExists
    } else {
        map.insert(name, obj.clone());
        CreateOutcome::Created
    }
}

#[async_trait]
impl ResourceClient for FakeClient {
    async fn create_deployment(&self, deployment: &Deployment) -> Result<CreateOutcome> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        if state.fail_creates {
            return Err(injected_failure());
        }
        Ok(insert_if_absent(&mut state.deployments, deployment.name_any(), deployment))
    }

    async fn create_service(&self, service: &Service) -> Result<CreateOutcome> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        if state.fail_creates {
            return Err(injected_failure());
        }
        Ok(insert_if_absent(&mut state.services, service.name_any(), service))
    }

    async fn list_klusters(&self, _namespace: &str) -> Result<Vec<Kluster>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_list {
            return Err(injected_failure());
        }
        Ok(state.klusters.clone())
    }
}
