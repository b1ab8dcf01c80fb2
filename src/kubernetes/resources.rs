// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create and list operations against the cluster API.

use crate::constants::OPERATOR_NAME;
use crate::error::{KlusterError, Result};
use crate::retry::{retry_with_backoff, RetryConfig};
use crate::types::Kluster;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Result of an idempotent create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The API server already had an object with this name
    AlreadyExists,
}

/// Capability used by the reconcilers to talk to the cluster.
///
/// Creates are never partial: an object is either created whole or rejected.
/// "Already exists" is reported as [`CreateOutcome::AlreadyExists`], never as
/// an error.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Create a Deployment in the namespace carried by its metadata
    async fn create_deployment(&self, deployment: &Deployment) -> Result<CreateOutcome>;

    /// Create a Service in the namespace carried by its metadata
    async fn create_service(&self, service: &Service) -> Result<CreateOutcome>;

    /// List Klusters in `namespace`, in the order the API server returns them
    async fn list_klusters(&self, namespace: &str) -> Result<Vec<Kluster>>;
}

/// [`ResourceClient`] backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeResourceClient {
    client: Client,
    retry: RetryConfig,
}

impl KubeResourceClient {
    pub fn new(client: Client, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    async fn create<K>(&self, obj: &K) -> Result<CreateOutcome>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = match obj.meta().namespace.as_deref() {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::default_namespaced(self.client.clone()),
        };
        let pp = PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        };

        let (api, pp) = (&api, &pp);
        retry_with_backoff(&self.retry, "create", move || async move {
            match api.create(pp, obj).await {
                Ok(_) => Ok(CreateOutcome::Created),
                Err(e) => {
                    let err = KlusterError::from(e);
                    if err.is_already_exists() {
                        Ok(CreateOutcome::AlreadyExists)
                    } else {
                        Err(err)
                    }
                }
            }
        })
        .await
    }
}

#[async_trait]
impl ResourceClient for KubeResourceClient {
    #[instrument(skip(self, deployment), fields(name = %deployment.name_any()))]
    async fn create_deployment(&self, deployment: &Deployment) -> Result<CreateOutcome> {
        let outcome = self.create(deployment).await?;
        debug!("Deployment create returned {:?}", outcome);
        Ok(outcome)
    }

    #[instrument(skip(self, service), fields(name = %service.name_any()))]
    async fn create_service(&self, service: &Service) -> Result<CreateOutcome> {
        let outcome = self.create(service).await?;
        debug!("Service create returned {:?}", outcome);
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn list_klusters(&self, namespace: &str) -> Result<Vec<Kluster>> {
        let klusters: Api<Kluster> = Api::namespaced(self.client.clone(), namespace);
        let klusters = &klusters;

        let list = retry_with_backoff(&self.retry, "list_klusters", move || async move {
            klusters.list(&ListParams::default()).await.map_err(KlusterError::from)
        })
        .await?;

        Ok(list.items)
    }
}
