// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal in-process agent/node record and resource-master identity.

use crate::id::AgentId;
use serde::{Deserialize, Serialize};

/// What the dispatcher knows about an agent without round-tripping to the
/// backing store. Liveness (`is_lost`) is only ever set by the dispatcher;
/// richer metadata (labels, tags) is refreshed by the database-sync loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub agent_id: AgentId,
    pub hostname: String,
    pub port: u16,
    pub is_lost: bool,
}

impl Node {
    pub fn new(agent_id: AgentId, hostname: impl Into<String>, port: u16) -> Self {
        Self {
            agent_id,
            hostname: hostname.into(),
            port,
            is_lost: false,
        }
    }
}

/// Identity of the resource master this framework is registered with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MasterInfo {
    pub hostname: String,
    pub port: u16,
}
