// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-task state machine and the status vocabulary the driver reports in.

use serde::{Deserialize, Serialize};

/// Status values the resource master reports for a task. Only the variants
/// after `Starting` drive a state transition; `Staging`/`Starting` are
/// informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Staging,
    Starting,
    Running,
    Finished,
    Failed,
    Killed,
    Lost,
    Error,
}

impl TaskStatus {
    /// Whether this status drives a state-machine transition at all.
    pub fn is_actionable(self) -> bool {
        !matches!(self, TaskStatus::Staging | TaskStatus::Starting)
    }

    /// Whether this status represents the task having reached a terminal
    /// state at the resource master (as opposed to merely progressing).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Finished
                | TaskStatus::Failed
                | TaskStatus::Killed
                | TaskStatus::Lost
                | TaskStatus::Error
        )
    }
}

/// Built-in errors this core attaches to task failures it can diagnose
/// itself, as opposed to errors the task's own exit status describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinError {
    /// The resource master reported the task as LOST.
    MesosLost,
    /// The task's agent was declared lost before the task reached a terminal state.
    NodeLost,
    /// A status update (or node-loss) arrived for a `job_exe_id` this scheduler
    /// has no running-execution record for.
    SchedulerLost,
}

impl BuiltinError {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinError::MesosLost => "mesos-lost",
            BuiltinError::NodeLost => "node-lost",
            BuiltinError::SchedulerLost => "scheduler-lost",
        }
    }
}

/// Lifecycle of a single task, `queued -> launched -> running -> {finished,
/// failed, lost}`. `finished`, `failed`, and `lost` are terminal: the
/// running-execution manager removes an execution once its current task
/// machine reports `is_terminal()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskState {
    Queued,
    Launched { launched_at_ms: i64 },
    Running { since_ms: i64 },
    Finished { exit_code: Option<i32>, when_ms: i64 },
    Failed { builtin_error: Option<BuiltinError>, when_ms: i64 },
    Lost { builtin_error: BuiltinError, when_ms: i64 },
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Finished { .. } | TaskState::Failed { .. } | TaskState::Lost { .. }
        )
    }

    /// Apply a driver-reported status update, producing the next state.
    ///
    /// `FAILED`/`KILLED`/`ERROR` carry no specific built-in error (the task's
    /// own result carries whatever diagnosis it has); only `LOST` attaches
    /// `mesos-lost` explicitly.
    pub fn apply_status(&self, status: TaskStatus, when_ms: i64, exit_code: Option<i32>) -> Self {
        match status {
            TaskStatus::Staging | TaskStatus::Starting => self.clone(),
            TaskStatus::Running => TaskState::Running { since_ms: when_ms },
            TaskStatus::Finished => TaskState::Finished { exit_code, when_ms },
            TaskStatus::Failed | TaskStatus::Killed | TaskStatus::Error => TaskState::Failed {
                builtin_error: None,
                when_ms,
            },
            TaskStatus::Lost => TaskState::Lost {
                builtin_error: BuiltinError::MesosLost,
                when_ms,
            },
        }
    }

    /// Transition caused by the task's agent being declared lost, independent
    /// of any status update from the resource master.
    pub fn execution_lost(when_ms: i64) -> Self {
        TaskState::Lost {
            builtin_error: BuiltinError::NodeLost,
            when_ms,
        }
    }

    /// Whether a best-effort stdout/stderr fetch should be attempted for this
    /// transition. Skipped for `Lost` since the agent is presumed unreachable.
    pub fn should_fetch_logs(&self) -> bool {
        matches!(
            self,
            TaskState::Running { .. } | TaskState::Finished { .. } | TaskState::Failed { .. }
        )
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
