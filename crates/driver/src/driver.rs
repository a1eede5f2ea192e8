// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The abstract interface to the resource master's client-side driver.

use crate::error::DriverError;
use async_trait::async_trait;
use scale_core::{NodeResources, OfferId, TaskId};

/// The launch-time description of a single task, as handed to
/// `SchedulerDriver::launch_tasks`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInfo {
    pub task_id: TaskId,
    pub resources: NodeResources,
    /// Opaque command/executor payload; this core does not interpret it.
    pub command: String,
}

/// Operations the core consumes from the resource master's client library.
///
/// Implementations are not assumed to be thread-safe beyond single-call
/// atomicity: callers hold the current handle behind an `ArcSwap` and must
/// not assume a handle survives across a `reregistered` rotation.
#[async_trait]
pub trait SchedulerDriver: Send + Sync + 'static {
    async fn launch_tasks(
        &self,
        offer_ids: &[OfferId],
        tasks: &[TaskInfo],
    ) -> Result<(), DriverError>;

    async fn decline_offer(&self, offer_id: &OfferId) -> Result<(), DriverError>;

    async fn kill_task(&self, task_id: &TaskId) -> Result<(), DriverError>;

    async fn reconcile_tasks(&self, task_ids: &[TaskId]) -> Result<(), DriverError>;

    /// Abort the driver. The resource master is assumed to already consider
    /// the framework disconnected by the time this is called.
    async fn abort(&self) -> Result<(), DriverError>;

    async fn stop(&self) -> Result<(), DriverError>;
}
