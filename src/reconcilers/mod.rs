// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconcilers that react to Kluster, Deployment and Service watch events.
//!
//! Convergence only ever creates whole objects. Every create is attempted
//! unconditionally and "already exists" counts as success, so any handler can
//! run again at any time, including concurrently with a handler of another
//! kind racing to create the same object.

pub mod kluster;
pub mod workload;

use crate::constants::TARGET_NAMESPACE;
use crate::desired::{derive_deployment, derive_service};
use crate::error::Result;
use crate::kubernetes::{CreateOutcome, ResourceClient};
use crate::types::{Kluster, KlusterSpec};
use kube::ResourceExt;
use tracing::{error, info, instrument, warn};

/// Keeps the bookapi Deployment and Service in existence.
///
/// Holds no state of its own; the cluster is the only source of truth.
pub struct Reconciler<C> {
    client: C,
}

impl<C: ResourceClient> Reconciler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Create the Deployment derived from `spec` unless it already exists
    pub async fn ensure_deployment(&self, spec: &KlusterSpec) -> Result<CreateOutcome> {
        let outcome = self.client.create_deployment(&derive_deployment(spec)).await;
        log_outcome("Deployment", &outcome);
        outcome
    }

    /// Create the Service derived from `spec` unless it already exists
    pub async fn ensure_service(&self, spec: &KlusterSpec) -> Result<CreateOutcome> {
        let outcome = self.client.create_service(&derive_service(spec)).await;
        log_outcome("Service", &outcome);
        outcome
    }

    /// The Kluster recreation is driven from: the first one listed in the
    /// target namespace.
    ///
    /// With several Klusters the choice follows the API server's list order.
    /// `None` when the list fails or is empty; both end the current trigger.
    #[instrument(skip(self))]
    pub async fn source_kluster(&self) -> Option<Kluster> {
        let klusters = match self.client.list_klusters(TARGET_NAMESPACE).await {
            Ok(k) => k,
            Err(e) => {
                error!("Failed to list Klusters, skipping recreation: {}", e);
                return None;
            }
        };

        if klusters.len() > 1 {
            warn!(
                "Found {} Klusters in {}, recreating from the first",
                klusters.len(),
                TARGET_NAMESPACE
            );
        }

        let first = klusters.into_iter().next();
        match &first {
            Some(kluster) => info!("Recreating from Kluster {}", kluster.name_any()),
            None => info!("No Kluster in {}, nothing to recreate", TARGET_NAMESPACE),
        }
        first
    }
}

fn log_outcome(kind: &str, outcome: &Result<CreateOutcome>) {
    match outcome {
        Ok(CreateOutcome::Created) => info!("{} created", kind),
        Ok(CreateOutcome::AlreadyExists) => info!("{} already exists", kind),
        Err(e) => error!("Error creating {}: {}", kind, e),
    }
}
