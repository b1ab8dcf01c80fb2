// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed add/update/delete notifications for a single watched kind.

pub mod cache;
pub mod source;

pub use cache::WatchCache;
pub use source::{dispatch, WatchSource};

use async_trait::async_trait;

/// A lifecycle transition of one object of kind `K`
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent<K> {
    /// First time the object is seen, including the initial listing
    Added(K),
    /// The object changed; `old` is the last cached state
    Updated { old: K, new: K },
    /// The object is gone; carries its final known state
    Deleted(K),
}

/// Receiver of the events of one watched kind.
///
/// Events for a kind are delivered one at a time and in order; handlers for
/// different kinds may run in parallel.
#[async_trait]
pub trait EventHandler<K>: Send + Sync
where
    K: Send + 'static,
{
    async fn handle(&self, event: WatchEvent<K>);
}
