// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction so managers and loops can be driven deterministically in tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of current time for the scheduler core.
///
/// Everything that needs "now" (offer aging, task timestamps, the
/// reconciliation and scheduling loops) goes through this trait so tests can
/// substitute [`FakeClock`] instead of racing the wall clock.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Current time as milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> i64;

    /// Current time as a [`SystemTime`], for interop with std APIs.
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.epoch_ms().max(0) as u64)
    }
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Deterministic clock for tests: starts at a fixed instant and only moves
/// when [`FakeClock::advance`] is called.
#[derive(Debug, Clone)]
pub struct FakeClock {
    epoch_ms: Arc<AtomicI64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(0)
    }

    pub fn at(epoch_ms: i64) -> Self {
        Self {
            epoch_ms: Arc::new(AtomicI64::new(epoch_ms)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.epoch_ms
            .fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }

    pub fn set(&self, epoch_ms: i64) {
        self.epoch_ms.store(epoch_ms, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn epoch_ms(&self) -> i64 {
        self.epoch_ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
