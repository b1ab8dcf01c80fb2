// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery, client creation, and resource operations.

pub mod client;
pub mod crd;
pub mod resources;

pub use client::create_client;
pub use crd::wait_for_kluster_crd;
pub use resources::{CreateOutcome, KubeResourceClient, ResourceClient};
