// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{app_labels, derived_metadata};
use crate::constants::{derived, TARGET_NAMESPACE};
use crate::types::KlusterSpec;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Build the ClusterIP Service fronting the bookapi pods
pub fn derive_service(spec: &KlusterSpec) -> Service {
    let port = spec.resolved_port();

    Service {
        metadata: derived_metadata(derived::SERVICE_NAME, TARGET_NAMESPACE),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_string()),
            selector: Some(app_labels()),
            ports: Some(vec![ServicePort {
                port,
                target_port: Some(IntOrString::Int(port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
