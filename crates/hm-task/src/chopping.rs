//! Wood-chopping cycle.  Same shape as mining, with a tree as the work site.

use std::time::Duration;

use hm_core::AgentId;
use hm_world::{ChoppingPhase, ChoppingState, GameState, TaskState};

use crate::mining::home_position;
use crate::{AgentBody, Progress, TaskContext, Travel};

/// Drives one peasant through the chopping cycle.
#[derive(Clone, Debug, Default)]
pub struct WoodChopping {
    travel: Travel,
}

impl WoodChopping {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    /// Advance `agent` by one tick.  A no-op when the agent is not chopping,
    /// has no tree, or its town does not resolve.
    pub fn update(&mut self, dt: Duration, body: &mut AgentBody, ctx: &mut TaskContext<'_>, agent: &AgentId) {
        let Some(task) = chopping_state(ctx.state, agent) else { return };
        let (phase, started, tree) = (task.phase, task.started, task.tree);
        let now = ctx.state.now();

        match phase {
            ChoppingPhase::WalkingToTree => {
                let Some(tree) = tree else {
                    log::debug!("{agent}: no tree to chop, skipping");
                    return;
                };
                let progress = self.travel.step(dt, body, tree, ctx.tuning.site_arrival, ctx.navigator, ctx.tuning);
                if progress == Progress::Arrived {
                    if let Some(task) = chopping_state_mut(ctx.state, agent) {
                        task.enter(ChoppingPhase::Chopping, now);
                    }
                    log::info!("{agent} arrived at tree, starting to chop");
                }
            }

            ChoppingPhase::Chopping => {
                if now.saturating_sub(started) >= ctx.tuning.work_duration {
                    if let Some(task) = chopping_state_mut(ctx.state, agent) {
                        task.enter(ChoppingPhase::ReturningToTown, now);
                    }
                    log::info!("{agent} finished chopping, returning to town");
                }
            }

            ChoppingPhase::ReturningToTown => {
                let Some(home) = home_position(ctx.state, agent) else { return };
                let progress = self.travel.step(dt, body, home, ctx.tuning.town_arrival, ctx.navigator, ctx.tuning);
                if progress == Progress::Arrived {
                    ctx.state.add_wood(1);
                    if let Some(task) = chopping_state_mut(ctx.state, agent) {
                        task.enter(ChoppingPhase::Waiting, now);
                    }
                    log::info!("{agent} returned to town with wood, waiting");
                }
            }

            ChoppingPhase::Waiting => {
                if now.saturating_sub(started) >= ctx.tuning.wait_duration {
                    self.travel.reset();
                    if let Some(task) = chopping_state_mut(ctx.state, agent) {
                        task.enter(ChoppingPhase::WalkingToTree, now);
                    }
                    log::info!("{agent} finished waiting, going to chop wood again");
                }
            }
        }
    }
}

fn chopping_state<'s>(state: &'s GameState, agent: &AgentId) -> Option<&'s ChoppingState> {
    match &state.peasant(agent)?.task {
        TaskState::ChopWood(c) => Some(c),
        _ => None,
    }
}

fn chopping_state_mut<'s>(state: &'s mut GameState, agent: &AgentId) -> Option<&'s mut ChoppingState> {
    match &mut state.peasant_mut(agent)?.task {
        TaskState::ChopWood(c) => Some(c),
        _ => None,
    }
}
