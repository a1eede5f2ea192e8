// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference in-memory `BackingStore`. Doubles as the test fake: seed it
//! with `seed_queue`/`seed_running`/etc. and assert on `failures()` after
//! the dispatcher or loops run.
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::backing_store::{
    BackingStore, JobTypeSummary, NodeSummary, PersistedExecution, QueuedJob, SchedulerSettings,
};
use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::Mutex;
use scale_core::{BuiltinError, JobExeId, MasterInfo};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFailure {
    pub job_exe_id: JobExeId,
    pub when_ms: i64,
    pub error_name: String,
}

#[derive(Default)]
struct State {
    master: Option<MasterInfo>,
    queue: VecDeque<QueuedJob>,
    running: Vec<PersistedExecution>,
    failures: Vec<RecordedFailure>,
    settings: SchedulerSettings,
    job_types: Vec<JobTypeSummary>,
    nodes: Vec<NodeSummary>,
    fail_handle_job_failure: bool,
}

#[derive(Default)]
pub struct InMemoryBackingStore {
    state: Mutex<State>,
}

impl InMemoryBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_queue(&self, jobs: impl IntoIterator<Item = QueuedJob>) {
        self.state.lock().queue.extend(jobs);
    }

    pub fn seed_running(&self, executions: impl IntoIterator<Item = PersistedExecution>) {
        self.state.lock().running = executions.into_iter().collect();
    }

    pub fn seed_job_types(&self, job_types: impl IntoIterator<Item = JobTypeSummary>) {
        self.state.lock().job_types = job_types.into_iter().collect();
    }

    pub fn seed_nodes(&self, nodes: impl IntoIterator<Item = NodeSummary>) {
        self.state.lock().nodes = nodes.into_iter().collect();
    }

    pub fn master(&self) -> Option<MasterInfo> {
        self.state.lock().master.clone()
    }

    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.state.lock().failures.clone()
    }

    pub fn queue_len(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Make every subsequent `handle_job_failure` call fail, to exercise a
    /// caller's compensating-action path.
    pub fn set_fail_handle_job_failure(&self, fail: bool) {
        self.state.lock().fail_handle_job_failure = fail;
    }
}

#[async_trait]
impl BackingStore for InMemoryBackingStore {
    async fn update_master(&self, master: &MasterInfo) -> Result<(), StorageError> {
        self.state.lock().master = Some(master.clone());
        Ok(())
    }

    async fn running_executions(&self) -> Result<Vec<PersistedExecution>, StorageError> {
        Ok(self.state.lock().running.clone())
    }

    async fn handle_job_failure(
        &self,
        job_exe_id: &JobExeId,
        when_ms: i64,
        error_name: &str,
    ) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if state.fail_handle_job_failure {
            return Err(StorageError::Unavailable("induced failure".into()));
        }
        tracing::debug!(%job_exe_id, error_name, "recording job failure");
        state.failures.push(RecordedFailure {
            job_exe_id: job_exe_id.clone(),
            when_ms,
            error_name: error_name.to_string(),
        });
        Ok(())
    }

    async fn get_builtin_error(&self, name: &str) -> Result<BuiltinError, StorageError> {
        match name {
            "mesos-lost" => Ok(BuiltinError::MesosLost),
            "node-lost" => Ok(BuiltinError::NodeLost),
            "scheduler-lost" => Ok(BuiltinError::SchedulerLost),
            other => Err(StorageError::UnknownBuiltinError(other.to_string())),
        }
    }

    async fn dequeue_ready(&self, max: usize) -> Result<Vec<QueuedJob>, StorageError> {
        let mut state = self.state.lock();
        let n = max.min(state.queue.len());
        Ok(state.queue.drain(..n).collect())
    }

    async fn requeue(&self, jobs: Vec<QueuedJob>) -> Result<(), StorageError> {
        self.state.lock().queue.extend(jobs);
        Ok(())
    }

    async fn sync_scheduler_config(&self) -> Result<SchedulerSettings, StorageError> {
        Ok(self.state.lock().settings.clone())
    }

    async fn sync_job_types(&self) -> Result<Vec<JobTypeSummary>, StorageError> {
        Ok(self.state.lock().job_types.clone())
    }

    async fn sync_nodes(&self) -> Result<Vec<NodeSummary>, StorageError> {
        Ok(self.state.lock().nodes.clone())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
