// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single resource grant from an agent, and the states it moves through
//! while held by the offer manager.

use crate::id::{AgentId, OfferId};
use crate::resources::NodeResources;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an offer inside the offer manager. An offer is stored
/// in exactly one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferState {
    /// Held by the offer manager, free to be reserved.
    Accumulated,
    /// Pulled out for a scheduling pass; not yet committed or released.
    Reserved,
    /// Committed to a launch; the driver has been told to use it.
    Launched,
    /// Declined or rescinded; no longer tracked.
    Discarded,
}

/// A resource offer as received from `resourceOffers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceOffer {
    pub offer_id: OfferId,
    pub agent_id: AgentId,
    pub resources: NodeResources,
    /// Epoch millis when this offer was accumulated, for age-based decline.
    pub received_at_ms: i64,
    pub state: OfferState,
}

impl ResourceOffer {
    pub fn new(
        offer_id: OfferId,
        agent_id: AgentId,
        resources: NodeResources,
        received_at_ms: i64,
    ) -> Self {
        Self {
            offer_id,
            agent_id,
            resources,
            received_at_ms,
            state: OfferState::Accumulated,
        }
    }

    pub fn age_ms(&self, now_ms: i64) -> i64 {
        (now_ms - self.received_at_ms).max(0)
    }
}
