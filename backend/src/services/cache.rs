//! Single-slot, time-bounded cache.
//!
//! Holds at most one value. A value is served until it is older than the TTL,
//! after which it is ignored until replaced. There is no explicit invalidation.

use parking_lot::RwLock;
use std::time::Duration;
use tokio::time::Instant;

struct Slot<T> {
    value: T,
    stored_at: Instant,
}

/// Cache holding a single value for a fixed window.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: RwLock<Option<Slot<T>>>,
}

impl<T: Clone> TtlCache<T> {
    /// A TTL of zero disables caching entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// The cached value, if one is present and still fresh.
    pub fn get(&self) -> Option<T> {
        if !self.is_enabled() {
            return None;
        }
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|s| s.stored_at.elapsed() < self.ttl)
            .map(|s| s.value.clone())
    }

    /// Replace the cached value and restart the window.
    pub fn insert(&self, value: T) {
        if !self.is_enabled() {
            return;
        }
        *self.slot.write() = Some(Slot {
            value,
            stored_at: Instant::now(),
        });
    }

    /// Age of the stored value, fresh or not.
    pub fn age(&self) -> Option<Duration> {
        self.slot.read().as_ref().map(|s| s.stored_at.elapsed())
    }
}
