// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for the offer-conservation and terminal-removal
//! invariants over randomized operation sequences.

use proptest::prelude::*;
use scale_core::{AgentId, JobExeId, NodeResources, OfferId, ResourceOffer, TaskId, TaskStatus};
use scale_engine::OfferManager;
use scale_engine::RunningExecutionManager;
use std::collections::HashSet;

fn arb_offer_id() -> impl Strategy<Value = OfferId> {
    (0u32..8).prop_map(|n| OfferId::new(format!("o{n}")))
}

#[derive(Debug, Clone)]
enum OfferOp {
    Add(OfferId),
    Rescind(OfferId),
    Launch(OfferId),
}

fn arb_ops() -> impl Strategy<Value = Vec<OfferOp>> {
    prop::collection::vec(
        prop_oneof![
            arb_offer_id().prop_map(OfferOp::Add),
            arb_offer_id().prop_map(OfferOp::Rescind),
            arb_offer_id().prop_map(OfferOp::Launch),
        ],
        0..40,
    )
}

proptest! {
    /// For every offer id, the manager holds at most one copy of it at a
    /// time no matter how add/rescind/launch are interleaved, and a
    /// rescind or launch for an id it does not hold is a no-op.
    #[test]
    fn offer_conservation_holds_under_arbitrary_interleaving(ops in arb_ops()) {
        let mgr = OfferManager::new();
        let mut live: HashSet<OfferId> = HashSet::new();

        for op in ops {
            match op {
                OfferOp::Add(id) => {
                    if !live.contains(&id) {
                        mgr.add_new_offers(vec![ResourceOffer::new(
                            id.clone(),
                            AgentId::new("a1"),
                            NodeResources::new(1.0, 1, 1),
                            0,
                        )]);
                        live.insert(id);
                    }
                }
                OfferOp::Rescind(id) => {
                    mgr.remove_offers(&[id.clone()]);
                    live.remove(&id);
                }
                OfferOp::Launch(id) => {
                    let reservation = mgr.ready_offers();
                    let mut launched = HashSet::new();
                    if live.contains(&id) {
                        launched.insert(id.clone());
                    }
                    mgr.consume(reservation, &launched);
                    live.remove(&id);
                }
            }
        }

        let remaining = mgr.ready_offers();
        let remaining_ids: HashSet<OfferId> = remaining
            .by_agent()
            .into_values()
            .flatten()
            .map(|o| o.offer_id)
            .collect();
        prop_assert_eq!(remaining_ids, live);
    }
}

proptest! {
    /// A running execution is present in the manager iff its task state has
    /// not yet reached a terminal status.
    #[test]
    fn terminal_removal_matches_state_machine(statuses in prop::collection::vec(0u8..8, 0..20)) {
        let mgr = RunningExecutionManager::new();
        let exe_id = JobExeId::new("e1");
        let task_id = TaskId::for_execution(&exe_id, 0);
        mgr.register(scale_core::RunningJobExecution::new(
            exe_id.clone(),
            AgentId::new("a1"),
            "host1",
            5051,
            task_id.clone(),
            0,
        ));

        let mut terminal = false;
        for (i, code) in statuses.into_iter().enumerate() {
            if terminal {
                break;
            }
            let status = match code {
                0 => TaskStatus::Staging,
                1 => TaskStatus::Starting,
                2 => TaskStatus::Running,
                3 => TaskStatus::Finished,
                4 => TaskStatus::Failed,
                5 => TaskStatus::Killed,
                6 => TaskStatus::Lost,
                _ => TaskStatus::Error,
            };
            if !status.is_actionable() {
                continue;
            }
            let exit_code = matches!(status, TaskStatus::Finished).then_some(0);
            let outcome = mgr.apply_status(&task_id, status, i as i64, exit_code);
            if let scale_engine::StatusOutcome::Applied { terminal: t, .. } = outcome {
                terminal = t;
            }
        }

        prop_assert_eq!(mgr.get(&exe_id).is_none(), terminal);
    }
}
