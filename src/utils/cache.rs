//! Caller-owned cache with a pluggable invalidation policy

use std::time::{Duration, Instant};

/// Decides when a cached value must be recomputed
pub trait InvalidationPolicy: Send + Sync {
    fn is_stale(&self, stored_at: Instant, now: Instant) -> bool;
}

/// Values expire a fixed time after they were stored
#[derive(Debug, Clone, Copy)]
pub struct TimeToLive(pub Duration);

impl InvalidationPolicy for TimeToLive {
    fn is_stale(&self, stored_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(stored_at) >= self.0
    }
}

/// Values live until [`Cached::invalidate`] is called
#[derive(Debug, Clone, Copy, Default)]
pub struct Manual;

impl InvalidationPolicy for Manual {
    fn is_stale(&self, _stored_at: Instant, _now: Instant) -> bool {
        false
    }
}

/// A single cached value
#[derive(Debug)]
pub struct Cached<T, P = TimeToLive> {
    entry: Option<(T, Instant)>,
    policy: P,
}

impl<T, P: InvalidationPolicy> Cached<T, P> {
    pub fn new(policy: P) -> Self {
        Self {
            entry: None,
            policy,
        }
    }

    /// The cached value, if present and still fresh at `now`
    pub fn get_at(&self, now: Instant) -> Option<&T> {
        match &self.entry {
            Some((value, stored_at)) if !self.policy.is_stale(*stored_at, now) => Some(value),
            _ => None,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.get_at(Instant::now())
    }

    pub fn insert_at(&mut self, value: T, now: Instant) {
        self.entry = Some((value, now));
    }

    pub fn insert(&mut self, value: T) {
        self.insert_at(value, Instant::now());
    }

    /// Return the fresh value or compute, store and return a new one
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, compute: F) -> &T {
        let now = Instant::now();
        if self.get_at(now).is_none() {
            self.entry = None;
        }
        let (value, _) = self.entry.get_or_insert_with(|| (compute(), now));
        value
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_expiry() {
        let start = Instant::now();
        let mut cache = Cached::new(TimeToLive(Duration::from_secs(30)));
        cache.insert_at("stats", start);

        assert_eq!(cache.get_at(start + Duration::from_secs(29)), Some(&"stats"));
        assert_eq!(cache.get_at(start + Duration::from_secs(30)), None);
    }

    #[test]
    fn test_manual_invalidate() {
        let start = Instant::now();
        let mut cache: Cached<u32, Manual> = Cached::new(Manual);
        cache.insert_at(7, start);
        assert_eq!(cache.get_at(start + Duration::from_secs(86_400)), Some(&7));

        cache.invalidate();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let mut cache: Cached<u32, Manual> = Cached::new(Manual);
        let mut calls = 0;
        assert_eq!(
            *cache.get_or_insert_with(|| {
                calls += 1;
                42
            }),
            42
        );
        assert_eq!(*cache.get_or_insert_with(|| 0), 42);
        assert_eq!(calls, 1);
    }
}
