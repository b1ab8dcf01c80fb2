// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used as field manager on created objects
pub const OPERATOR_NAME: &str = "kluster-operator";

/// Namespace watched for Klusters and holding the derived resources
pub const TARGET_NAMESPACE: &str = "default";

/// Port used when a Kluster leaves `spec.port` unset (zero)
pub const DEFAULT_PORT: i32 = 9090;

/// Labels shared by the derived Deployment and Service
pub mod labels {
    pub const APP_KEY: &str = "app";
    pub const APP_VALUE: &str = "bookapi";
}

/// Fixed identities of the resources derived from a Kluster
pub mod derived {
    pub const DEPLOYMENT_NAME: &str = "bookapi-deployment";
    pub const SERVICE_NAME: &str = "bookapi-service";
    pub const CONTAINER_NAME: &str = "bookapi-container";
    /// Entrypoint of the bookapi image, launched as `<binary> start -p <port>`
    pub const CONTAINER_BINARY: &str = "./BookApi";
}

/// CRD polling configuration
pub mod crd {
    pub const GROUP: &str = "pulok.dev";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "Kluster";
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
