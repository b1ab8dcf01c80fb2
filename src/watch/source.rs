// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-kind dispatch loop feeding a cached watch into an [`EventHandler`].

use super::{EventHandler, WatchCache};
use futures::{Stream, StreamExt};
use kube_runtime::{watcher, WatchStreamExt};
use kube::{Api, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Watch of one resource kind.
///
/// There is no periodic resync: handlers only run when the API server
/// reports a change or the watch is re-listed.
pub struct WatchSource<K> {
    kind: &'static str,
    api: Api<K>,
    config: watcher::Config,
}

impl<K> WatchSource<K>
where
    K: Resource + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
    K::DynamicType: Default,
{
    pub fn new(kind: &'static str, api: Api<K>) -> Self {
        Self {
            kind,
            api,
            config: watcher::Config::default(),
        }
    }

    /// Deliver events to `handler` until `shutdown` fires or the watch ends
    pub async fn run<H>(self, handler: Arc<H>, shutdown: watch::Receiver<bool>)
    where
        H: EventHandler<K> + ?Sized,
    {
        info!("Starting {} watch", self.kind);
        let stream = watcher(self.api, self.config).default_backoff();
        dispatch(self.kind, stream, handler.as_ref(), shutdown).await;
        info!("{} watch stopped", self.kind);
    }
}

/// Drive `stream` through a [`WatchCache`] and hand every transition to `handler`.
///
/// The handler is awaited before the next event is pulled, which keeps
/// delivery for one kind serialized. Shutdown is only observed between
/// events; a handler that is already running is allowed to finish.
pub async fn dispatch<K, S, H>(
    kind: &str,
    stream: S,
    handler: &H,
    mut shutdown: watch::Receiver<bool>,
) where
    K: ResourceExt + Clone + Send + 'static,
    S: Stream<Item = Result<watcher::Event<K>, watcher::Error>>,
    H: EventHandler<K> + ?Sized,
{
    let mut cache = WatchCache::new();
    futures::pin_mut!(stream);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                debug!("Shutdown requested, {} dispatch loop exiting", kind);
                break;
            }
            event = stream.next() => match event {
                Some(Ok(event)) => {
                    for transition in cache.apply(event) {
                        handler.handle(transition).await;
                    }
                }
                Some(Err(e)) => warn!("{} watch error: {}", kind, e),
                None => break,
            }
        }
    }
}
