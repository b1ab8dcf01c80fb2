// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kluster events: a new Kluster gets its Deployment and Service.

use super::Reconciler;
use crate::kubernetes::ResourceClient;
use crate::types::Kluster;
use crate::watch::{EventHandler, WatchEvent};
use async_trait::async_trait;
use kube::ResourceExt;
use tracing::{debug, info, instrument};

#[async_trait]
impl<C: ResourceClient> EventHandler<Kluster> for Reconciler<C> {
    async fn handle(&self, event: WatchEvent<Kluster>) {
        match event {
            WatchEvent::Added(kluster) => self.kluster_added(&kluster).await,
            // Drift correction is out of scope; existing objects are left as they are
            WatchEvent::Updated { new, .. } => {
                debug!("Kluster updated: {}, no action", new.name_any());
            }
            // No owner references, so nothing is cascaded
            WatchEvent::Deleted(kluster) => {
                info!("Kluster deleted: {}", kluster.name_any());
            }
        }
    }
}

impl<C: ResourceClient> Reconciler<C> {
    #[instrument(skip(self, kluster), fields(kluster = %kluster.name_any()))]
    async fn kluster_added(&self, kluster: &Kluster) {
        info!("Kluster created: {}", kluster.name_any());

        // Failures are logged by ensure_*; the next trigger retries
        let _ = self.ensure_deployment(&kluster.spec).await;
        let _ = self.ensure_service(&kluster.spec).await;
    }
}
