// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wiring of the three watches into one [`Reconciler`].

use crate::constants::TARGET_NAMESPACE;
use crate::kubernetes::ResourceClient;
use crate::reconcilers::Reconciler;
use crate::types::Kluster;
use crate::watch::WatchSource;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::{Api, Client};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Run one dispatch loop per watched kind until `shutdown` fires.
///
/// Klusters are watched in every namespace; the derived resources and the
/// Klusters used for recreation stay in the target namespace.
///
/// Each loop is its own task, so handlers of different kinds run in parallel
/// while events of one kind stay ordered.
pub async fn run<C>(
    client: Client,
    reconciler: Arc<Reconciler<C>>,
    shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()>
where
    C: ResourceClient + 'static,
{
    let klusters = WatchSource::new(
        "Kluster",
        Api::<Kluster>::all(client.clone()),
    );
    let deployments = WatchSource::new(
        "Deployment",
        Api::<Deployment>::namespaced(client.clone(), TARGET_NAMESPACE),
    );
    let services = WatchSource::new(
        "Service",
        Api::<Service>::namespaced(client, TARGET_NAMESPACE),
    );

    let kluster_loop = tokio::spawn(klusters.run(reconciler.clone(), shutdown.clone()));
    let deployment_loop = tokio::spawn(deployments.run(reconciler.clone(), shutdown.clone()));
    let service_loop = tokio::spawn(services.run(reconciler, shutdown));

    let (k, d, s) = tokio::join!(kluster_loop, deployment_loop, service_loop);
    k?;
    d?;
    s?;

    info!("All watches stopped");
    Ok(())
}
