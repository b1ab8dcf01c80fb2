// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired state of the resources derived from a Kluster.
//!
//! Every function here is pure: the same spec always yields the same object.

pub mod deployment;
pub mod service;

pub use deployment::derive_deployment;
pub use service::derive_service;

use crate::constants::labels;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// The `app=bookapi` label set carried by every derived object
pub fn app_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(labels::APP_KEY.to_string(), labels::APP_VALUE.to_string())])
}

/// True when the object is labelled `app=bookapi`
pub fn has_app_label(meta: &ObjectMeta) -> bool {
    meta.labels
        .as_ref()
        .and_then(|l| l.get(labels::APP_KEY))
        .is_some_and(|v| v == labels::APP_VALUE)
}

fn derived_metadata(name: &str, namespace: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        labels: Some(app_labels()),
        ..Default::default()
    }
}
