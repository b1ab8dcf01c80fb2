// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction from the operator configuration

use crate::config::Config;
use crate::error::{KlusterError, Result};
use kube::{config::KubeConfigOptions, Client};
use std::path::Path;
use tracing::{info, instrument};

/// Create the client used for all API calls.
///
/// An explicit `KUBECONFIG_PATH` wins; otherwise kube's inference chain
/// (`KUBECONFIG`, `~/.kube/config`, in-cluster service account) applies.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match config.kubeconfig_path.as_deref() {
        Some(path) => create_client_from_path(path).await,
        None => Ok(Client::try_default().await?),
    }
}

async fn create_client_from_path(path: &Path) -> Result<Client> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await?;
    create_client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| KlusterError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                KlusterError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| KlusterError::KubeconfigError(format!("Failed to create client: {}", e)))
}
