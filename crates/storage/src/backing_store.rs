// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The abstract backing store: scheduler configuration, job-type metadata,
//! the node roster, the work queue, and built-in error lookup.
//!
//! This is the collaborator the database-sync loop refreshes from and the
//! scheduling loop dequeues ready work from; a real implementation talks to
//! whatever the deployment's system-of-record database is.

use crate::error::StorageError;
use async_trait::async_trait;
use scale_core::{AgentId, BuiltinError, JobExeId, MasterInfo, NodeResources, TaskId};

/// A job execution the backing store believes is currently running, as
/// reported to the reconciliation loop on startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedExecution {
    pub job_exe_id: JobExeId,
    pub agent_id: AgentId,
    pub node_hostname: String,
    pub node_port: u16,
    pub current_task_id: TaskId,
}

/// A unit of ready work dequeued for a scheduling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedJob {
    pub job_exe_id: JobExeId,
    pub resources: NodeResources,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchedulerSettings {
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobTypeSummary {
    pub name: String,
    pub default_resources: NodeResources,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSummary {
    pub agent_id: AgentId,
    pub hostname: String,
    pub port: u16,
}

#[async_trait]
pub trait BackingStore: Send + Sync + 'static {
    /// Persist the resource master's current address.
    async fn update_master(&self, master: &MasterInfo) -> Result<(), StorageError>;

    /// Executions the backing store's system-of-record believes are running,
    /// used to seed the reconciliation set on `registered`/`reregistered`.
    async fn running_executions(&self) -> Result<Vec<PersistedExecution>, StorageError>;

    /// Mark a queued execution failed with a named error (built-in or not).
    async fn handle_job_failure(
        &self,
        job_exe_id: &JobExeId,
        when_ms: i64,
        error_name: &str,
    ) -> Result<(), StorageError>;

    /// Resolve a built-in error name to its [`BuiltinError`] variant.
    async fn get_builtin_error(&self, name: &str) -> Result<BuiltinError, StorageError>;

    /// Dequeue up to `max` units of ready work, highest priority first.
    async fn dequeue_ready(&self, max: usize) -> Result<Vec<QueuedJob>, StorageError>;

    /// Return jobs a scheduling pass dequeued but could not place back to the
    /// queue, so they are reconsidered next pass instead of being lost.
    async fn requeue(&self, jobs: Vec<QueuedJob>) -> Result<(), StorageError>;

    async fn sync_scheduler_config(&self) -> Result<SchedulerSettings, StorageError>;

    async fn sync_job_types(&self) -> Result<Vec<JobTypeSummary>, StorageError>;

    async fn sync_nodes(&self) -> Result<Vec<NodeSummary>, StorageError>;
}
