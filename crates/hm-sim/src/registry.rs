//! Per-agent runtime storage and the per-tick dispatch over it.

use std::time::Duration;

use hm_core::{AgentId, TaskType, Vec3};
use hm_nav::Navigator;
use hm_task::{AgentBody, ManualMove, TaskContext, TaskMachine, TaskTuning};
use hm_world::{GameState, TaskState};
use rustc_hash::FxHashMap;

use crate::{SimError, SimResult};

/// Everything the sim owns for one agent besides its shared task state.
#[derive(Clone, Debug)]
pub struct AgentRuntime {
    pub id:      AgentId,
    pub body:    AgentBody,
    /// The machine for the agent's current cyclic task; `None` while idle.
    pub machine: Option<TaskMachine>,
    pub manual:  ManualMove,
}

/// Agent runtimes in spawn order.
///
/// Spawn order is the update order, so runs are reproducible.  An id → index
/// map makes command lookups O(1).
#[derive(Clone, Debug, Default)]
pub struct AgentRegistry {
    agents: Vec<AgentRuntime>,
    index:  FxHashMap<AgentId, usize>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent standing at `position`.
    pub fn spawn(&mut self, id: AgentId, position: Vec3) -> SimResult<()> {
        if self.index.contains_key(&id) {
            return Err(SimError::DuplicateAgent(id));
        }
        log::debug!("spawned {id} at {position}");
        self.index.insert(id.clone(), self.agents.len());
        self.agents.push(AgentRuntime {
            id,
            body:    AgentBody::at(position),
            machine: None,
            manual:  ManualMove::new(),
        });
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Runtimes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentRuntime> {
        self.agents.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &AgentId> {
        self.agents.iter().map(|a| &a.id)
    }

    pub fn get(&self, id: &AgentId) -> Option<&AgentRuntime> {
        self.index.get(id).map(|&i| &self.agents[i])
    }

    fn get_mut(&mut self, id: &AgentId) -> SimResult<&mut AgentRuntime> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.agents[i]),
            None => Err(SimError::UnknownAgent(id.clone())),
        }
    }

    pub fn body(&self, id: &AgentId) -> Option<&AgentBody> {
        self.get(id).map(|a| &a.body)
    }

    pub fn position(&self, id: &AgentId) -> Option<Vec3> {
        self.get(id).map(|a| a.body.position)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Put agent `id` on `task`, restarting the task from its first phase.
    ///
    /// The agent's machine is always rebuilt, even when the task type is
    /// unchanged, so a re-assignment drops any cached path.  A chop-wood
    /// assignment without an explicit tree targets the tree nearest the
    /// agent's current position.
    pub fn assign_task(
        &mut self,
        id:    &AgentId,
        task:  TaskType,
        tree:  Option<Vec3>,
        state: &mut GameState,
    ) -> SimResult<()> {
        let agent = self.get_mut(id)?;
        let tree = match task {
            TaskType::ChopWood => tree.or_else(|| state.trees().nearest(agent.body.position)),
            _ => tree,
        };
        state.assign_task(id, task, tree)?;
        agent.machine = TaskMachine::for_task(task);
        Ok(())
    }

    /// Start a manual move of agent `id` towards `target`.
    ///
    /// The path is planned immediately.  The move only advances while the
    /// agent has no cyclic task; a busy agent keeps the target pending until
    /// it is made idle.
    pub fn move_to(&mut self, id: &AgentId, target: Vec3, navigator: &dyn Navigator) -> SimResult<()> {
        let agent = self.get_mut(id)?;
        agent.manual.command(agent.body.position, target, navigator);
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Update every agent for one step of length `dt`.
    ///
    /// Agents with a cyclic task run its machine (created on demand when the
    /// task changed behind the registry's back, e.g. the initial tasks from
    /// the world file).  Idle agents drop any machine and advance their
    /// manual move.
    pub fn tick(
        &mut self,
        dt:        Duration,
        state:     &mut GameState,
        navigator: &dyn Navigator,
        tuning:    &TaskTuning,
    ) {
        for agent in &mut self.agents {
            let task = state.peasant(&agent.id).map_or(TaskType::Idle, |p| p.task_type());

            if !task.is_active() {
                agent.machine = None;
                agent.manual.update(dt, &mut agent.body, navigator, tuning);
                continue;
            }

            if agent.machine.as_ref().map(TaskMachine::kind) != Some(task) {
                if task == TaskType::ChopWood {
                    resolve_tree(state, &agent.id, agent.body.position);
                }
                agent.machine = TaskMachine::for_task(task);
            }

            if let Some(machine) = agent.machine.as_mut() {
                let mut ctx = TaskContext::new(state, navigator, tuning);
                machine.update(dt, &mut agent.body, &mut ctx, &agent.id);
            }
        }
    }
}

/// Give a chopper without a target the tree nearest `from`.
fn resolve_tree(state: &mut GameState, id: &AgentId, from: Vec3) {
    let nearest = state.trees().nearest(from);
    let Some(peasant) = state.peasant_mut(id) else { return };
    if let TaskState::ChopWood(chopping) = &mut peasant.task {
        if chopping.tree.is_none() {
            chopping.tree = nearest;
            match nearest {
                Some(tree) => log::debug!("{id}: targeting nearest tree at {tree}"),
                None => log::warn!("{id}: no trees in the world"),
            }
        }
    }
}
