// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A running job execution: the scheduler-side record of a unit of queued
//! work that has been launched as one or more tasks.

use crate::id::{AgentId, JobExeId, TaskId};
use crate::task::TaskState;
use serde::{Deserialize, Serialize};

/// Captured output of a single task's attempt, recorded on any status update
/// that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResults {
    pub task_id: TaskId,
    pub exit_code: Option<i32>,
    pub when_ms: i64,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl TaskResults {
    pub fn new(task_id: TaskId, when_ms: i64) -> Self {
        Self {
            task_id,
            exit_code: None,
            when_ms,
            stdout: None,
            stderr: None,
        }
    }
}

/// A job execution the scheduler has launched (or is about to). Owns the
/// current task's state machine and accumulated results across whatever
/// tasks have been attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningJobExecution {
    pub job_exe_id: JobExeId,
    pub agent_id: AgentId,
    pub node_hostname: String,
    pub node_port: u16,
    pub current_task_id: TaskId,
    pub state: TaskState,
    pub results: Vec<TaskResults>,
}

impl RunningJobExecution {
    pub fn new(
        job_exe_id: JobExeId,
        agent_id: AgentId,
        node_hostname: impl Into<String>,
        node_port: u16,
        current_task_id: TaskId,
        launched_at_ms: i64,
    ) -> Self {
        Self {
            job_exe_id,
            agent_id,
            node_hostname: node_hostname.into(),
            node_port,
            current_task_id,
            state: TaskState::Launched { launched_at_ms },
            results: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn record_results(&mut self, results: TaskResults) {
        self.results.push(results);
    }
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
