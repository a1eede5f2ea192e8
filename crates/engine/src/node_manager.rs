// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The canonical in-process map of known agents.

use parking_lot::Mutex;
use scale_core::{AgentId, Node};
use scale_storage::NodeSummary;
use std::collections::HashMap;

#[derive(Default)]
pub struct NodeManager {
    nodes: Mutex<HashMap<AgentId, Node>>,
}

impl NodeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent the first time an offer is seen from it. A
    /// pre-existing record is left alone (in particular, `is_lost` is not
    /// reset here; see [`NodeManager::mark_recovered`]).
    pub fn observe(&self, agent_id: &AgentId, hostname: &str, port: u16) {
        self.nodes
            .lock()
            .entry(agent_id.clone())
            .or_insert_with(|| Node::new(agent_id.clone(), hostname, port));
    }

    pub fn get(&self, agent_id: &AgentId) -> Option<Node> {
        self.nodes.lock().get(agent_id).cloned()
    }

    pub fn mark_lost(&self, agent_id: &AgentId) {
        if let Some(node) = self.nodes.lock().get_mut(agent_id) {
            node.is_lost = true;
        }
    }

    /// Evidence (a fresh offer) that a previously-lost agent is alive again.
    pub fn mark_recovered(&self, agent_id: &AgentId) {
        if let Some(node) = self.nodes.lock().get_mut(agent_id) {
            node.is_lost = false;
        }
    }

    pub fn is_lost(&self, agent_id: &AgentId) -> bool {
        self.nodes
            .lock()
            .get(agent_id)
            .map(|n| n.is_lost)
            .unwrap_or(false)
    }

    /// Merge in the latest roster from the backing store. New agents are
    /// added; known agents keep their current liveness, since liveness is
    /// owned exclusively by the dispatcher.
    pub fn sync_from_roster(&self, roster: Vec<NodeSummary>) {
        let mut nodes = self.nodes.lock();
        for summary in roster {
            nodes
                .entry(summary.agent_id.clone())
                .or_insert_with(|| Node::new(summary.agent_id, summary.hostname, summary.port));
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.lock().is_empty()
    }
}

#[cfg(test)]
#[path = "node_manager_tests.rs"]
mod tests;
