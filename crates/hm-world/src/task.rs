//! Per-peasant task state: which cycle a peasant is running and where in it.
//!
//! The phase and its entry time live here, in shared state, so UI and output
//! can read them by peasant id.  The movement runtime for the current travel
//! leg (cached path, waypoint cursor, recalculation timer) is owned by the
//! task machine in `hm-task`.

use std::time::Duration;

use hm_core::{MineId, TaskType, Vec3};

// ── Phases ────────────────────────────────────────────────────────────────────

/// Steps of the gold-mining cycle, in order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum MiningPhase {
    #[default]
    WalkingToMine,
    Mining,
    WalkingToTown,
    WaitingAtTown,
}

impl MiningPhase {
    /// `true` while the peasant should be walking.
    #[inline]
    pub fn is_travelling(self) -> bool {
        matches!(self, MiningPhase::WalkingToMine | MiningPhase::WalkingToTown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MiningPhase::WalkingToMine => "walking_to_mine",
            MiningPhase::Mining        => "mining",
            MiningPhase::WalkingToTown => "walking_to_town",
            MiningPhase::WaitingAtTown => "waiting_at_town",
        }
    }
}

/// Steps of the wood-chopping cycle, in order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ChoppingPhase {
    #[default]
    WalkingToTree,
    Chopping,
    ReturningToTown,
    Waiting,
}

impl ChoppingPhase {
    #[inline]
    pub fn is_travelling(self) -> bool {
        matches!(self, ChoppingPhase::WalkingToTree | ChoppingPhase::ReturningToTown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChoppingPhase::WalkingToTree   => "walking_to_tree",
            ChoppingPhase::Chopping        => "chopping",
            ChoppingPhase::ReturningToTown => "returning_to_town",
            ChoppingPhase::Waiting         => "waiting",
        }
    }
}

// ── Per-task state ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct MiningState {
    pub phase:   MiningPhase,
    /// Simulation time at which `phase` was entered.
    pub started: Duration,
    /// `None` when the world had no mine at assignment; the cycle then
    /// stalls in `WalkingToMine`.
    pub mine:    Option<MineId>,
}

impl MiningState {
    pub fn new(mine: Option<MineId>, now: Duration) -> Self {
        Self { phase: MiningPhase::WalkingToMine, started: now, mine }
    }

    #[inline]
    pub fn enter(&mut self, phase: MiningPhase, now: Duration) {
        self.phase = phase;
        self.started = now;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoppingState {
    pub phase:   ChoppingPhase,
    pub started: Duration,
    /// Tree being worked.  Resolved to the nearest tree when left unset.
    pub tree:    Option<Vec3>,
}

impl ChoppingState {
    pub fn new(tree: Option<Vec3>, now: Duration) -> Self {
        Self { phase: ChoppingPhase::WalkingToTree, started: now, tree }
    }

    #[inline]
    pub fn enter(&mut self, phase: ChoppingPhase, now: Duration) {
        self.phase = phase;
        self.started = now;
    }
}

// ── TaskState ─────────────────────────────────────────────────────────────────

/// A peasant's task and, for the cyclic tasks, its progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TaskState {
    #[default]
    Idle,
    MineGold(MiningState),
    ChopWood(ChoppingState),
}

impl TaskState {
    #[inline]
    pub fn kind(&self) -> TaskType {
        match self {
            TaskState::Idle        => TaskType::Idle,
            TaskState::MineGold(_) => TaskType::MineGold,
            TaskState::ChopWood(_) => TaskType::ChopWood,
        }
    }

    /// Current phase label, or `"idle"`.
    pub fn phase_name(&self) -> &'static str {
        match self {
            TaskState::Idle        => "idle",
            TaskState::MineGold(s) => s.phase.as_str(),
            TaskState::ChopWood(s) => s.phase.as_str(),
        }
    }

    /// `true` while a cyclic task is in one of its walking phases.
    pub fn is_travelling(&self) -> bool {
        match self {
            TaskState::Idle        => false,
            TaskState::MineGold(s) => s.phase.is_travelling(),
            TaskState::ChopWood(s) => s.phase.is_travelling(),
        }
    }
}
