// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scale-driver: the abstract interface to the resource master, and the
//! abstract interface to per-agent log retrieval.
//!
//! Neither trait here knows anything about a specific wire binding; a real
//! implementation lives outside this workspace and is plugged in at the
//! daemon's process-wiring boundary.

pub mod driver;
pub mod error;
pub mod log_fetcher;

pub use driver::{SchedulerDriver, TaskInfo};
pub use error::DriverError;
pub use log_fetcher::LogFetcher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DriverCall, FakeDriver, FakeLogFetcher};
