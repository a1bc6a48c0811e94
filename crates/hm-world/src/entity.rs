//! Plain entity records held by [`GameState`](crate::GameState).

use hm_core::{AgentId, MineId, TaskType, TownId, Vec3};

use crate::TaskState;

/// A settlement peasants return to with their haul.
#[derive(Clone, Debug, PartialEq)]
pub struct Town {
    pub id:       TownId,
    pub name:     String,
    pub position: Vec3,
}

/// A gold mine.  Mines are walkable so peasants can reach their centre.
#[derive(Clone, Debug, PartialEq)]
pub struct GoldMine {
    pub id:       MineId,
    pub position: Vec3,
}

/// A worker agent's identity and task state.
///
/// `task` is the only field that changes after spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Peasant {
    pub id:      AgentId,
    pub name:    String,
    pub town_id: TownId,
    pub task:    TaskState,
}

impl Peasant {
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, town_id: impl Into<TownId>) -> Self {
        Self {
            id:      id.into(),
            name:    name.into(),
            town_id: town_id.into(),
            task:    TaskState::Idle,
        }
    }

    #[inline]
    pub fn task_type(&self) -> TaskType {
        self.task.kind()
    }
}

/// Kingdom-wide resource counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Economy {
    pub gold: u64,
    pub wood: u64,
}
