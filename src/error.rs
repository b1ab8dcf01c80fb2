// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KlusterError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Failed to read kubeconfig file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render CRD: {0}")]
    CrdRender(#[from] serde_yaml::Error),
}

impl KlusterError {
    /// True when the API server rejected a create because the object is already there
    pub fn is_already_exists(&self) -> bool {
        matches!(self, KlusterError::KubeError(kube::Error::Api(err))
            if err.code == 409 && err.reason == "AlreadyExists")
    }
}

pub type Result<T> = std::result::Result<T, KlusterError>;
