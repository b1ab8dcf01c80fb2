// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kluster_operator::config::Config;
use kluster_operator::controller;
use kluster_operator::kubernetes::{create_client, wait_for_kluster_crd, KubeResourceClient};
use kluster_operator::reconcilers::Reconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Kluster operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubeconfig={:?}, max_attempts={}",
        config.kubeconfig_path, config.retry.max_attempts
    );

    // Create Kubernetes client
    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    if config.wait_for_crd {
        info!("Waiting for Kluster CRD to become available...");
        wait_for_kluster_crd(&client).await?;
    }

    let reconciler = Arc::new(Reconciler::new(KubeResourceClient::new(
        client.clone(),
        config.retry.clone(),
    )));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, stopping watches");
        let _ = shutdown_tx.send(true);
    });

    info!("Starting watches...");
    controller::run(client, reconciler, shutdown_rx).await?;

    warn!("Kluster operator stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
