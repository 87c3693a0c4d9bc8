//! Client-side cache for hero-image URL sets.
//!
//! The backend's `GET /image/all` response is cached for 24 hours. The time
//! source is injected so the expiry rule is testable without wall-clock
//! waits; this cache is the only persistence-adjacent state in the engine.

use chrono::{DateTime, Duration, Utc};

/// Injected time source.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Expiring cache of the fetched image URL set.
#[derive(Debug, Clone)]
pub struct ImageCache<C: Clock> {
    clock: C,
    ttl: Duration,
    slot: Option<(DateTime<Utc>, Vec<String>)>,
}

impl<C: Clock> ImageCache<C> {
    /// Creates an empty cache with the standard 24-hour expiry.
    pub fn new(clock: C) -> Self {
        Self::with_ttl(clock, Duration::hours(24))
    }

    pub fn with_ttl(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            slot: None,
        }
    }

    /// Stores a freshly fetched URL set, stamped with the current time.
    pub fn put(&mut self, urls: Vec<String>) {
        self.slot = Some((self.clock.now(), urls));
    }

    /// Returns the cached set while it is still fresh; `None` once expired
    /// or never filled. An expired entry is treated exactly like a miss:
    /// callers refetch and `put` again.
    pub fn get(&self) -> Option<&[String]> {
        let (stored_at, urls) = self.slot.as_ref()?;
        if self.clock.now() - *stored_at < self.ttl {
            Some(urls)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
