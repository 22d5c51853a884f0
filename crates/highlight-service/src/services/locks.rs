//! Per-message async locks
//!
//! All handling for one original message is serialized through a single
//! lock shared by both boards, while different messages run in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use highlight_core::Snowflake;

type Slot = Arc<Mutex<()>>;

/// Map of message ID to lock. Entries are removed once nobody holds or
/// waits on them, including waiters dropped before they acquire.
#[derive(Debug, Default)]
pub struct KeyLocks {
    slots: Arc<DashMap<Snowflake, Slot>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`
    ///
    /// Cancel safe: dropping the future before it resolves leaves no entry
    /// behind once the current holder releases.
    pub async fn lock(&self, key: Snowflake) -> KeyGuard {
        // Declared before the wait so it drops after the pending acquire
        let release = Release {
            key,
            slots: Arc::clone(&self.slots),
        };
        let slot = self.slots.entry(key).or_default().value().clone();
        let guard = slot.lock_owned().await;
        KeyGuard {
            _guard: guard,
            release,
        }
    }

    /// Number of keys currently held or awaited
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Removes the map entry when the last reference to its slot goes away
#[derive(Debug)]
struct Release {
    key: Snowflake,
    slots: Arc<DashMap<Snowflake, Slot>>,
}

impl Drop for Release {
    fn drop(&mut self) {
        self.slots
            .remove_if(&self.key, |_, slot| Arc::strong_count(slot) == 1);
    }
}

/// Exclusive access to one key, released on drop
#[derive(Debug)]
pub struct KeyGuard {
    // Field order matters: the mutex is released before the entry is checked
    _guard: OwnedMutexGuard<()>,
    release: Release,
}

impl KeyGuard {
    pub fn key(&self) -> Snowflake {
        self.release.key
    }
}
