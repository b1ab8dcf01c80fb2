// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{app_labels, derived_metadata};
use crate::constants::{derived, TARGET_NAMESPACE};
use crate::types::KlusterSpec;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;

/// Build the bookapi Deployment for a Kluster spec.
///
/// Replicas and image are copied as-is; an empty image is left for the API
/// server to reject.
pub fn derive_deployment(spec: &KlusterSpec) -> Deployment {
    let port = spec.resolved_port();

    Deployment {
        metadata: derived_metadata(derived::DEPLOYMENT_NAME, TARGET_NAMESPACE),
        spec: Some(DeploymentSpec {
            replicas: Some(spec.replicas),
            selector: LabelSelector {
                match_labels: Some(app_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: derived::CONTAINER_NAME.to_string(),
                        image: Some(spec.image.clone()),
                        command: Some(container_command(port)),
                        ports: Some(vec![ContainerPort {
                            container_port: port,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// `./BookApi start -p <port>`
fn container_command(port: i32) -> Vec<String> {
    vec![
        derived::CONTAINER_BINARY.to_string(),
        "start".to_string(),
        "-p".to_string(),
        port.to_string(),
    ]
}
