// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Greedy first-fit-decreasing bin-packing of ready work onto reserved
//! offers.
//!
//! Granularity is one offer per task: a job is matched against the first
//! single offer with enough room, never split across multiple offers. Jobs
//! that fit no offer in this pass stay queued and are retried on the next
//! scheduling pass.

use scale_core::{AgentId, OfferId, ResourceOffer};
use scale_storage::QueuedJob;
use std::collections::HashMap;

pub struct PlacedTask {
    pub job: QueuedJob,
    pub agent_id: AgentId,
    pub offer_id: OfferId,
}

pub struct MatchResult {
    pub placed: Vec<PlacedTask>,
    pub unmatched: Vec<QueuedJob>,
}

/// `reserved_by_agent` is consumed; offers used for a placement are removed
/// from it so the caller (the scheduling loop) can tell exactly which
/// reservation offers remain to be released.
pub fn match_jobs(
    mut jobs: Vec<QueuedJob>,
    reserved_by_agent: HashMap<AgentId, Vec<ResourceOffer>>,
) -> MatchResult {
    // Decreasing by resource weight; a stable sort preserves dequeue (FIFO)
    // order among jobs of equal weight.
    jobs.sort_by(|a, b| weight(&b.resources).total_cmp(&weight(&a.resources)));

    let mut agents: Vec<AgentId> = reserved_by_agent.keys().cloned().collect();
    agents.sort();
    let mut pools = reserved_by_agent;

    let mut placed = Vec::new();
    let mut unmatched = Vec::new();

    for job in jobs {
        let mut found = None;
        'agents: for agent_id in &agents {
            let Some(offers) = pools.get(agent_id) else {
                continue;
            };
            for (idx, offer) in offers.iter().enumerate() {
                if offer.resources.fits(&job.resources) {
                    found = Some((agent_id.clone(), idx));
                    break 'agents;
                }
            }
        }

        match found {
            Some((agent_id, idx)) => {
                let offer = pools.get_mut(&agent_id).unwrap().remove(idx);
                placed.push(PlacedTask {
                    job,
                    agent_id,
                    offer_id: offer.offer_id,
                });
            }
            None => unmatched.push(job),
        }
    }

    MatchResult { placed, unmatched }
}

fn weight(resources: &scale_core::NodeResources) -> f64 {
    resources.cpus * 1_000_000.0 + resources.mem_mb as f64 * 1000.0 + resources.disk_mb as f64
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
