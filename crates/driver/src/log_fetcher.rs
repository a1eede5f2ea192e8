// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort retrieval of an agent's task stdout/stderr.
//!
//! Every method returns `Option` rather than `Result`: a fetch failure is
//! logged by the caller and never changes a task's state transition (see
//! `scale_core::TaskState::should_fetch_logs`).

use async_trait::async_trait;
use scale_core::TaskId;

#[async_trait]
pub trait LogFetcher: Send + Sync + 'static {
    /// The directory the agent stores this task's sandbox under, if known.
    async fn task_directory(&self, hostname: &str, port: u16, task_id: &TaskId) -> Option<String>;

    /// A URL pointing at the agent's log browser for this task, if known.
    async fn task_url(&self, hostname: &str, port: u16, task_id: &TaskId) -> Option<String>;

    /// The contents of `stdout` or `stderr` for this task.
    async fn task_file(
        &self,
        hostname: &str,
        port: u16,
        task_id: &TaskId,
        file_name: &str,
    ) -> Option<String>;
}
