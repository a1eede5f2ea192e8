// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test builders shared across crates that depend on `scale-core` with the
//! `test-support` feature enabled.

use crate::id::{AgentId, JobExeId, OfferId, TaskId};
use crate::offer::ResourceOffer;
use crate::resources::NodeResources;

/// Build a `ResourceOffer` with sensible defaults, for tests that only care
/// about a subset of fields.
pub struct OfferBuilder {
    offer_id: String,
    agent_id: String,
    resources: NodeResources,
    received_at_ms: i64,
}

impl OfferBuilder {
    pub fn new(offer_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            agent_id: agent_id.into(),
            resources: NodeResources::new(4.0, 8192, 10240),
            received_at_ms: 0,
        }
    }

    pub fn resources(mut self, resources: NodeResources) -> Self {
        self.resources = resources;
        self
    }

    pub fn received_at_ms(mut self, when: i64) -> Self {
        self.received_at_ms = when;
        self
    }

    pub fn build(self) -> ResourceOffer {
        ResourceOffer::new(
            OfferId::new(self.offer_id),
            AgentId::new(self.agent_id),
            self.resources,
            self.received_at_ms,
        )
    }
}

pub fn task_id(exe: &str, ordinal: u32) -> TaskId {
    TaskId::for_execution(&JobExeId::new(exe), ordinal)
}
