// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local mirror of a watched kind, used to classify raw watcher events.

use super::WatchEvent;
use kube_runtime::watcher;
use kube::ResourceExt;
use std::collections::{HashMap, HashSet};

/// Last-known state of every object of one kind.
///
/// `kube_runtime::watcher` only reports "applied" and "deleted"; the cache
/// tells an add from an update, and detects objects that vanished while the
/// watch was being re-listed.
pub struct WatchCache<K> {
    store: HashMap<String, K>,
    /// Keys seen during an ongoing re-list
    relisted: Option<HashSet<String>>,
}

impl<K> Default for WatchCache<K> {
    fn default() -> Self {
        Self {
            store: HashMap::new(),
            relisted: None,
        }
    }
}

fn key_of<K: ResourceExt>(obj: &K) -> String {
    match obj.namespace() {
        Some(ns) => format!("{}/{}", ns, obj.name_any()),
        None => obj.name_any(),
    }
}

impl<K> WatchCache<K>
where
    K: ResourceExt + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, namespace: Option<&str>, name: &str) -> Option<&K> {
        let key = match namespace {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.to_string(),
        };
        self.store.get(&key)
    }

    /// Fold a raw watcher event into the cache and return the resulting transitions
    pub fn apply(&mut self, event: watcher::Event<K>) -> Vec<WatchEvent<K>> {
        match event {
            watcher::Event::Apply(obj) => vec![self.upsert(obj)],
            watcher::Event::Delete(obj) => {
                self.store.remove(&key_of(&obj));
                vec![WatchEvent::Deleted(obj)]
            }
            watcher::Event::Init => {
                self.relisted = Some(HashSet::new());
                Vec::new()
            }
            watcher::Event::InitApply(obj) => {
                if let Some(seen) = self.relisted.as_mut() {
                    seen.insert(key_of(&obj));
                }
                vec![self.upsert(obj)]
            }
            watcher::Event::InitDone => {
                let Some(seen) = self.relisted.take() else {
                    return Vec::new();
                };
                let gone: Vec<String> = self
                    .store
                    .keys()
                    .filter(|k| !seen.contains(*k))
                    .cloned()
                    .collect();
                gone.into_iter()
                    .filter_map(|k| self.store.remove(&k))
                    .map(WatchEvent::Deleted)
                    .collect()
            }
        }
    }

    fn upsert(&mut self, obj: K) -> WatchEvent<K> {
        match self.store.insert(key_of(&obj), obj.clone()) {
            Some(old) => WatchEvent::Updated { old, new: obj },
            None => WatchEvent::Added(obj),
        }
    }
}
