// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracks in-flight job executions and routes status updates to their task
//! state machines.

use parking_lot::Mutex;
use scale_core::{AgentId, JobExeId, RunningJobExecution, TaskId, TaskResults, TaskState, TaskStatus};
use std::collections::HashMap;

/// Result of applying a driver status update to the manager.
pub enum StatusOutcome {
    /// No execution is known for the task's embedded `job_exe_id`.
    Unknown { job_exe_id: JobExeId },
    /// The execution was updated. If `terminal`, it has already been removed
    /// from the manager and `execution` is the final snapshot.
    Applied {
        execution: RunningJobExecution,
        terminal: bool,
    },
}

#[derive(Default)]
pub struct RunningExecutionManager {
    by_exe: Mutex<HashMap<JobExeId, RunningJobExecution>>,
}

impl RunningExecutionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, execution: RunningJobExecution) {
        self.by_exe
            .lock()
            .insert(execution.job_exe_id.clone(), execution);
    }

    pub fn get(&self, job_exe_id: &JobExeId) -> Option<RunningJobExecution> {
        self.by_exe.lock().get(job_exe_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_exe.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_exe.lock().is_empty()
    }

    /// Apply a status update reported for `task_id`. Always safe to call for
    /// a task whose execution is unknown — callers are expected to route
    /// `Unknown` to a scheduler-lost failure and, either way, remove the
    /// task from the reconciliation set.
    pub fn apply_status(
        &self,
        task_id: &TaskId,
        status: TaskStatus,
        when_ms: i64,
        exit_code: Option<i32>,
    ) -> StatusOutcome {
        let job_exe_id = task_id.job_exe_id();
        let mut map = self.by_exe.lock();
        let Some(execution) = map.get_mut(&job_exe_id) else {
            return StatusOutcome::Unknown { job_exe_id };
        };

        let next_state = execution.state.apply_status(status, when_ms, exit_code);
        execution.state = next_state;
        if exit_code.is_some() || matches!(status, TaskStatus::Finished) {
            execution.record_results(TaskResults {
                task_id: task_id.clone(),
                exit_code,
                when_ms,
                stdout: None,
                stderr: None,
            });
        }

        let terminal = execution.is_finished();
        let snapshot = execution.clone();
        if terminal {
            map.remove(&job_exe_id);
        }
        StatusOutcome::Applied {
            execution: snapshot,
            terminal,
        }
    }

    /// Transition every execution on `agent_id` to `lost`, removing each
    /// (the transition is always terminal) and returning the removed
    /// snapshots so the caller can run the node-lost compensating actions
    /// per execution.
    pub fn mark_agent_lost(&self, agent_id: &AgentId, when_ms: i64) -> Vec<RunningJobExecution> {
        let mut map = self.by_exe.lock();
        let affected: Vec<JobExeId> = map
            .iter()
            .filter(|(_, exe)| &exe.agent_id == agent_id)
            .map(|(id, _)| id.clone())
            .collect();

        let mut removed = Vec::with_capacity(affected.len());
        for exe_id in affected {
            if let Some(mut exe) = map.remove(&exe_id) {
                exe.state = TaskState::execution_lost(when_ms);
                removed.push(exe);
            }
        }
        removed
    }
}

#[cfg(test)]
#[path = "running_execution_manager_tests.rs"]
mod tests;
