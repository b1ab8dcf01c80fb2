// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryConfig;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit kubeconfig file; the default inference chain is used when unset
    pub kubeconfig_path: Option<PathBuf>,
    /// Retry policy for remote creates and lists
    pub retry: RetryConfig,
    pub wait_for_crd: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kubeconfig_path: None,
            retry: RetryConfig::with_max_attempts(1),
            wait_for_crd: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let kubeconfig_path = lookup("KUBECONFIG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let max_attempts = match lookup("CREATE_MAX_ATTEMPTS") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("CREATE_MAX_ATTEMPTS is not a valid number: {}", v))?,
            None => defaults.retry.max_attempts,
        };

        let initial_delay = match lookup("CREATE_RETRY_DELAY_MS") {
            Some(v) => Duration::from_millis(
                v.parse::<u64>()
                    .with_context(|| format!("CREATE_RETRY_DELAY_MS is not a valid number: {}", v))?,
            ),
            None => defaults.retry.initial_delay,
        };

        let wait_for_crd = lookup("WAIT_FOR_CRD")
            .map(|v| v.parse().unwrap_or(true))
            .unwrap_or(defaults.wait_for_crd);

        Ok(Config {
            kubeconfig_path,
            retry: RetryConfig {
                // zero is unbounded in RetryConfig
                max_attempts: max_attempts.max(1),
                initial_delay,
                ..defaults.retry
            },
            wait_for_crd,
        })
    }
}
