// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment and Service events: self-healing of the derived resources.

use super::Reconciler;
use crate::desired::has_app_label;
use crate::kubernetes::ResourceClient;
use crate::watch::{EventHandler, WatchEvent};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use tracing::{debug, info, instrument};

#[async_trait]
impl<C: ResourceClient> EventHandler<Deployment> for Reconciler<C> {
    async fn handle(&self, event: WatchEvent<Deployment>) {
        if let WatchEvent::Deleted(deployment) = event {
            self.deployment_deleted(&deployment).await;
        }
    }
}

#[async_trait]
impl<C: ResourceClient> EventHandler<Service> for Reconciler<C> {
    async fn handle(&self, event: WatchEvent<Service>) {
        if let WatchEvent::Deleted(service) = event {
            self.service_deleted(&service).await;
        }
    }
}

impl<C: ResourceClient> Reconciler<C> {
    #[instrument(skip(self, deployment), fields(deployment = %deployment.name_any()))]
    async fn deployment_deleted(&self, deployment: &Deployment) {
        if !has_app_label(&deployment.metadata) {
            debug!("Deleted Deployment is not labelled app=bookapi, ignoring");
            return;
        }

        info!("Deployment deleted, self-healing triggered");
        if let Some(kluster) = self.source_kluster().await {
            let _ = self.ensure_deployment(&kluster.spec).await;
        }
    }

    #[instrument(skip(self, service), fields(service = %service.name_any()))]
    async fn service_deleted(&self, service: &Service) {
        if !has_app_label(&service.metadata) {
            debug!("Deleted Service is not labelled app=bookapi, ignoring");
            return;
        }

        info!("Service deleted, self-healing triggered");
        if let Some(kluster) = self.source_kluster().await {
            let _ = self.ensure_service(&kluster.spec).await;
        }
    }
}
