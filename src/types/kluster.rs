// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_PORT;
use crate::error::Result;
use kube::{CustomResource, CustomResourceExt};
use serde::{Deserialize, Serialize};

/// Desired state of a bookapi workload.
///
/// Missing fields take their zero value, so a Kluster without `port`
/// resolves to [`DEFAULT_PORT`].
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "pulok.dev", version = "v1alpha1", kind = "Kluster")]
#[kube(namespaced)]
#[kube(printcolumn = r#"{"name":"Replicas","type":"integer","jsonPath":".spec.replicas"}"#)]
#[kube(printcolumn = r#"{"name":"Image","type":"string","jsonPath":".spec.image"}"#)]
#[serde(rename_all = "camelCase")]
pub struct KlusterSpec {
    #[serde(default)]
    pub replicas: i32,
    #[serde(default)]
    pub image: String,
    /// Zero means "use the default port"
    #[serde(default)]
    pub port: i32,
}

impl KlusterSpec {
    /// The port both derived resources listen on
    pub fn resolved_port(&self) -> i32 {
        if self.port == 0 {
            DEFAULT_PORT
        } else {
            self.port
        }
    }
}

/// Render the Kluster CRD manifest as YAML
pub fn kluster_crd_yaml() -> Result<String> {
    Ok(serde_yaml::to_string(&Kluster::crd())?)
}
