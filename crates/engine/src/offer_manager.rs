// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Buffers resource offers per agent and hands out reservations to the
//! scheduling loop.

use parking_lot::Mutex;
use scale_core::{AgentId, OfferId, OfferState, ResourceOffer};
use std::collections::{HashMap, HashSet};

/// A snapshot of offers pulled out of circulation for one scheduling pass.
/// Must be resolved with [`OfferManager::consume`] or [`OfferManager::release`];
/// dropping it without either leaves the offers stuck in `Reserved`.
pub struct Reservation {
    offers: Vec<ResourceOffer>,
}

impl Reservation {
    /// Offers grouped by agent, the shape the bin-packer wants.
    pub fn by_agent(&self) -> HashMap<AgentId, Vec<ResourceOffer>> {
        let mut map: HashMap<AgentId, Vec<ResourceOffer>> = HashMap::new();
        for offer in &self.offers {
            map.entry(offer.agent_id.clone())
                .or_default()
                .push(offer.clone());
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[derive(Default)]
pub struct OfferManager {
    by_agent: Mutex<HashMap<AgentId, Vec<ResourceOffer>>>,
    lost_agents: Mutex<HashSet<AgentId>>,
}

impl OfferManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add newly-received offers. Offers for an agent marked lost are
    /// silently discarded; see [`OfferManager::readmit`].
    pub fn add_new_offers(&self, offers: Vec<ResourceOffer>) {
        let lost = self.lost_agents.lock();
        let mut map = self.by_agent.lock();
        for offer in offers {
            if lost.contains(&offer.agent_id) {
                continue;
            }
            map.entry(offer.agent_id.clone()).or_default().push(offer);
        }
    }

    /// Idempotent removal by offer id, e.g. from `offerRescinded`.
    pub fn remove_offers(&self, ids: &[OfferId]) {
        let mut map = self.by_agent.lock();
        let id_set: HashSet<&OfferId> = ids.iter().collect();
        for offers in map.values_mut() {
            offers.retain(|o| !id_set.contains(&o.offer_id));
        }
    }

    /// Purge every offer for `agent_id` and reject further offers for it
    /// until [`OfferManager::readmit`] is called.
    pub fn lost_node(&self, agent_id: &AgentId) {
        self.by_agent.lock().remove(agent_id);
        self.lost_agents.lock().insert(agent_id.clone());
    }

    /// Evidence that a previously-lost agent is alive again (a fresh offer
    /// arrived for it); re-admit it so future offers are accepted.
    pub fn readmit(&self, agent_id: &AgentId) {
        self.lost_agents.lock().remove(agent_id);
    }

    pub fn is_lost(&self, agent_id: &AgentId) -> bool {
        self.lost_agents.lock().contains(agent_id)
    }

    /// Pull every currently-accumulated offer out as a reservation.
    pub fn ready_offers(&self) -> Reservation {
        let mut map = self.by_agent.lock();
        let mut reserved = Vec::new();
        for offers in map.values_mut() {
            for offer in offers.iter_mut() {
                if offer.state == OfferState::Accumulated {
                    offer.state = OfferState::Reserved;
                    reserved.push(offer.clone());
                }
            }
        }
        Reservation { offers: reserved }
    }

    /// Commit `launched` offers out of circulation entirely; return the
    /// remainder of the reservation to `Accumulated`.
    pub fn consume(&self, reservation: Reservation, launched: &HashSet<OfferId>) {
        let mut map = self.by_agent.lock();
        for offer in reservation.offers {
            let Some(v) = map.get_mut(&offer.agent_id) else {
                continue;
            };
            if launched.contains(&offer.offer_id) {
                v.retain(|o| o.offer_id != offer.offer_id);
            } else if let Some(o) = v.iter_mut().find(|o| o.offer_id == offer.offer_id) {
                o.state = OfferState::Accumulated;
            }
        }
    }

    /// Return a reservation untouched to `Accumulated`.
    pub fn release(&self, reservation: Reservation) {
        self.consume(reservation, &HashSet::new());
    }

    /// Offer ids older than `max_age_ms`, removed from accumulated storage
    /// so the caller can tell the driver to decline them.
    pub fn decline_aged(&self, now_ms: i64, max_age_ms: i64) -> Vec<OfferId> {
        let mut map = self.by_agent.lock();
        let mut aged = Vec::new();
        for offers in map.values_mut() {
            offers.retain(|o| {
                if o.state == OfferState::Accumulated && o.age_ms(now_ms) > max_age_ms {
                    aged.push(o.offer_id.clone());
                    false
                } else {
                    true
                }
            });
        }
        aged
    }
}

#[cfg(test)]
#[path = "offer_manager_tests.rs"]
mod tests;
