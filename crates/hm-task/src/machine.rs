//! Tagged dispatch over the cyclic task machines.

use std::time::Duration;

use hm_core::{AgentId, TaskType};

use crate::{AgentBody, GoldMining, TaskContext, Travel, WoodChopping};

/// The machine running a peasant's current cyclic task.
#[derive(Clone, Debug)]
pub enum TaskMachine {
    Mining(GoldMining),
    Chopping(WoodChopping),
}

impl TaskMachine {
    /// Fresh machine for `task`; `None` for idle.
    pub fn for_task(task: TaskType) -> Option<Self> {
        match task {
            TaskType::Idle     => None,
            TaskType::MineGold => Some(TaskMachine::Mining(GoldMining::new())),
            TaskType::ChopWood => Some(TaskMachine::Chopping(WoodChopping::new())),
        }
    }

    #[inline]
    pub fn kind(&self) -> TaskType {
        match self {
            TaskMachine::Mining(_)   => TaskType::MineGold,
            TaskMachine::Chopping(_) => TaskType::ChopWood,
        }
    }

    /// The current travel leg's runtime.
    pub fn travel(&self) -> &Travel {
        match self {
            TaskMachine::Mining(m)   => m.travel(),
            TaskMachine::Chopping(c) => c.travel(),
        }
    }

    pub fn update(&mut self, dt: Duration, body: &mut AgentBody, ctx: &mut TaskContext<'_>, agent: &AgentId) {
        match self {
            TaskMachine::Mining(m)   => m.update(dt, body, ctx, agent),
            TaskMachine::Chopping(c) => c.update(dt, body, ctx, agent),
        }
    }
}
