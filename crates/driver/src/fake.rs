// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake driver and log fetcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::driver::{SchedulerDriver, TaskInfo};
use crate::error::DriverError;
use crate::log_fetcher::LogFetcher;
use async_trait::async_trait;
use parking_lot::Mutex;
use scale_core::{OfferId, TaskId};
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    LaunchTasks {
        offer_ids: Vec<OfferId>,
        tasks: Vec<TaskInfo>,
    },
    DeclineOffer {
        offer_id: OfferId,
    },
    KillTask {
        task_id: TaskId,
    },
    ReconcileTasks {
        task_ids: Vec<TaskId>,
    },
    Abort,
    Stop,
}

struct FakeDriverState {
    calls: Vec<DriverCall>,
    fail_launch: bool,
}

/// Fake `SchedulerDriver` that records every call for assertion and can be
/// told to fail the next launch to exercise the compensating-action paths.
#[derive(Clone)]
pub struct FakeDriver {
    inner: Arc<Mutex<FakeDriverState>>,
}

impl Default for FakeDriver {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeDriverState {
                calls: Vec::new(),
                fail_launch: false,
            })),
        }
    }
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_fail_launch(&self, fail: bool) {
        self.inner.lock().fail_launch = fail;
    }
}

#[async_trait]
impl SchedulerDriver for FakeDriver {
    async fn launch_tasks(
        &self,
        offer_ids: &[OfferId],
        tasks: &[TaskInfo],
    ) -> Result<(), DriverError> {
        let mut inner = self.inner.lock();
        inner.calls.push(DriverCall::LaunchTasks {
            offer_ids: offer_ids.to_vec(),
            tasks: tasks.to_vec(),
        });
        if inner.fail_launch {
            return Err(DriverError::LaunchFailed("fake induced failure".into()));
        }
        Ok(())
    }

    async fn decline_offer(&self, offer_id: &OfferId) -> Result<(), DriverError> {
        self.inner.lock().calls.push(DriverCall::DeclineOffer {
            offer_id: offer_id.clone(),
        });
        Ok(())
    }

    async fn kill_task(&self, task_id: &TaskId) -> Result<(), DriverError> {
        self.inner.lock().calls.push(DriverCall::KillTask {
            task_id: task_id.clone(),
        });
        Ok(())
    }

    async fn reconcile_tasks(&self, task_ids: &[TaskId]) -> Result<(), DriverError> {
        self.inner.lock().calls.push(DriverCall::ReconcileTasks {
            task_ids: task_ids.to_vec(),
        });
        Ok(())
    }

    async fn abort(&self) -> Result<(), DriverError> {
        self.inner.lock().calls.push(DriverCall::Abort);
        Ok(())
    }

    async fn stop(&self) -> Result<(), DriverError> {
        self.inner.lock().calls.push(DriverCall::Stop);
        Ok(())
    }
}

/// Fake `LogFetcher` with per-task canned responses; defaults to "fetch
/// failed" (`None`) for anything not explicitly set, matching the best-effort
/// contract real fetchers have in production.
#[derive(Clone, Default)]
pub struct FakeLogFetcher {
    files: Arc<Mutex<HashMap<(String, String), String>>>,
}

impl FakeLogFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_file(&self, task_id: &TaskId, file_name: &str, contents: impl Into<String>) {
        self.files.lock().insert(
            (task_id.as_str().to_string(), file_name.to_string()),
            contents.into(),
        );
    }
}

#[async_trait]
impl LogFetcher for FakeLogFetcher {
    async fn task_directory(&self, hostname: &str, port: u16, task_id: &TaskId) -> Option<String> {
        Some(format!("{hostname}:{port}/sandbox/{task_id}"))
    }

    async fn task_url(&self, hostname: &str, port: u16, task_id: &TaskId) -> Option<String> {
        Some(format!("http://{hostname}:{port}/tasks/{task_id}"))
    }

    async fn task_file(
        &self,
        _hostname: &str,
        _port: u16,
        task_id: &TaskId,
        file_name: &str,
    ) -> Option<String> {
        self.files
            .lock()
            .get(&(task_id.as_str().to_string(), file_name.to_string()))
            .cloned()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
