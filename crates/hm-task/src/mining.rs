//! Gold-mining cycle.
//!
//! ```text
//! WalkingToMine ──arrive (< 1.0)──► Mining ──5 s──► WalkingToTown
//!       ▲                                                 │
//!       └──────5 s────── WaitingAtTown ◄──arrive (< 2.0), gold +1
//! ```

use std::time::Duration;

use hm_core::AgentId;
use hm_world::{GameState, MiningPhase, MiningState, TaskState};

use crate::{AgentBody, Progress, TaskContext, Travel};

/// Drives one peasant through the mining cycle.
#[derive(Clone, Debug, Default)]
pub struct GoldMining {
    travel: Travel,
}

impl GoldMining {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    /// Advance `agent` by one tick.  A no-op when the agent is not mining
    /// or its mine or town does not resolve.
    pub fn update(&mut self, dt: Duration, body: &mut AgentBody, ctx: &mut TaskContext<'_>, agent: &AgentId) {
        let Some(task) = mining_state(ctx.state, agent) else { return };
        let (phase, started, mine_id) = (task.phase, task.started, task.mine.clone());
        let now = ctx.state.now();

        match phase {
            MiningPhase::WalkingToMine => {
                let Some(mine) = mine_id.as_ref().and_then(|id| ctx.state.mine(id)) else {
                    log::debug!("{agent}: mine {mine_id:?} not found, skipping");
                    return;
                };
                let dest = mine.position;
                let progress = self.travel.step(dt, body, dest, ctx.tuning.site_arrival, ctx.navigator, ctx.tuning);
                if progress == Progress::Arrived {
                    if let Some(task) = mining_state_mut(ctx.state, agent) {
                        task.enter(MiningPhase::Mining, now);
                    }
                    log::info!("{agent} arrived at mine, starting to mine");
                }
            }

            MiningPhase::Mining => {
                if now.saturating_sub(started) >= ctx.tuning.work_duration {
                    if let Some(task) = mining_state_mut(ctx.state, agent) {
                        task.enter(MiningPhase::WalkingToTown, now);
                    }
                    log::info!("{agent} finished mining, returning to town");
                }
            }

            MiningPhase::WalkingToTown => {
                let Some(home) = home_position(ctx.state, agent) else { return };
                let progress = self.travel.step(dt, body, home, ctx.tuning.town_arrival, ctx.navigator, ctx.tuning);
                if progress == Progress::Arrived {
                    ctx.state.add_gold(1);
                    if let Some(task) = mining_state_mut(ctx.state, agent) {
                        task.enter(MiningPhase::WaitingAtTown, now);
                    }
                    log::info!("{agent} returned to town with gold, waiting");
                }
            }

            MiningPhase::WaitingAtTown => {
                if now.saturating_sub(started) >= ctx.tuning.wait_duration {
                    self.travel.reset();
                    if let Some(task) = mining_state_mut(ctx.state, agent) {
                        task.enter(MiningPhase::WalkingToMine, now);
                    }
                    log::info!("{agent} finished waiting, going to mine again");
                }
            }
        }
    }
}

fn mining_state<'s>(state: &'s GameState, agent: &AgentId) -> Option<&'s MiningState> {
    match &state.peasant(agent)?.task {
        TaskState::MineGold(m) => Some(m),
        _ => None,
    }
}

fn mining_state_mut<'s>(state: &'s mut GameState, agent: &AgentId) -> Option<&'s mut MiningState> {
    match &mut state.peasant_mut(agent)?.task {
        TaskState::MineGold(m) => Some(m),
        _ => None,
    }
}

/// Position of the agent's home town.
pub(crate) fn home_position(state: &GameState, agent: &AgentId) -> Option<hm_core::Vec3> {
    let town_id = &state.peasant(agent)?.town_id;
    match state.town(town_id) {
        Some(town) => Some(town.position),
        None => {
            log::debug!("{agent}: home town {town_id} not found, skipping");
            None
        }
    }
}
