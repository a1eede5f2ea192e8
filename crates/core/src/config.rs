// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler-wide tunables. Loaded from environment variables by the daemon
//! crate (see `scale-daemon::env`); this struct just carries the resolved
//! values down into the engine loops.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Name this framework registers with the resource master under.
    pub framework_name: String,
    /// Resource role requested from the resource master.
    pub framework_role: String,
    /// Age above which an accumulated offer is proactively declined.
    pub offer_hold_duration: Duration,
    /// Duty-cycle period of the scheduling loop.
    pub scheduling_interval: Duration,
    /// Period of the reconciliation loop.
    pub reconciliation_interval: Duration,
    /// Period of the database-sync loop.
    pub db_sync_interval: Duration,
    /// Upper bound on new launches attempted per scheduling pass.
    pub max_new_job_exes_per_cycle: usize,
    /// Callback latency, in ms, above which a warning is logged for
    /// callbacks that do not touch the backing store.
    pub normal_warn_ms: u64,
    /// Callback latency, in ms, above which a warning is logged for
    /// callbacks that may touch the backing store.
    pub db_warn_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            framework_name: "scale".to_string(),
            framework_role: "*".to_string(),
            offer_hold_duration: Duration::from_secs(30),
            scheduling_interval: Duration::from_millis(100),
            reconciliation_interval: Duration::from_secs(60),
            db_sync_interval: Duration::from_secs(5),
            max_new_job_exes_per_cycle: 50,
            normal_warn_ms: 5,
            db_warn_ms: 100,
        }
    }
}
