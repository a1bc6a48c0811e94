//! `GameState`: the entity tables, the economy, and the simulation clock.

use std::time::Duration;

use hm_core::{AgentId, MineId, SimClock, TaskType, TownId, Vec3};
use rustc_hash::FxHashMap;

use crate::{
    ChoppingState, Economy, GoldMine, MiningState, Peasant, TaskState, Town, TreeIndex,
    WorldConfig, WorldError, WorldResult,
};

/// Shared mutable game state.
///
/// Peasants are kept in insertion order; an id → index map makes lookups by
/// id O(1).  Towns and mines are few enough that a linear scan is fine.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    economy:       Economy,
    towns:         Vec<Town>,
    mines:         Vec<GoldMine>,
    peasants:      Vec<Peasant>,
    peasant_index: FxHashMap<AgentId, usize>,
    trees:         TreeIndex,
    clock:         SimClock,
}

impl GameState {
    pub fn new(towns: Vec<Town>, mines: Vec<GoldMine>, trees: Vec<Vec3>) -> Self {
        Self {
            towns,
            mines,
            trees: TreeIndex::new(trees),
            ..Self::default()
        }
    }

    /// Build the state described by `config`.
    ///
    /// Peasants start in the first phase of their configured task: miners
    /// target the first mine, choppers have no tree yet (it is resolved from
    /// their position when the task first runs).
    ///
    /// # Errors
    ///
    /// Duplicate town, mine, or peasant ids, and peasants whose `town_id`
    /// does not name a town.
    pub fn from_config(config: &WorldConfig) -> WorldResult<Self> {
        let mut towns: Vec<Town> = Vec::with_capacity(config.towns.len());
        for t in &config.towns {
            if towns.iter().any(|x| x.id == t.id) {
                return Err(WorldError::DuplicateId { kind: "town", id: t.id.to_string() });
            }
            towns.push(Town { id: t.id.clone(), name: t.name.clone(), position: t.position });
        }

        let mut mines: Vec<GoldMine> = Vec::with_capacity(config.gold_mines.len());
        for m in &config.gold_mines {
            if mines.iter().any(|x| x.id == m.id) {
                return Err(WorldError::DuplicateId { kind: "mine", id: m.id.to_string() });
            }
            mines.push(GoldMine { id: m.id.clone(), position: m.position });
        }

        let mut state = Self::new(towns, mines, config.trees.clone());
        for p in &config.peasants {
            state.add_peasant(Peasant::new(p.id.clone(), p.name.clone(), p.town_id.clone()))?;
            state.assign_task(&p.id, p.task, None)?;
        }
        Ok(state)
    }

    /// Register a peasant.  Its task state is kept as given.
    pub fn add_peasant(&mut self, peasant: Peasant) -> WorldResult<()> {
        if self.peasant_index.contains_key(&peasant.id) {
            return Err(WorldError::DuplicateId { kind: "peasant", id: peasant.id.to_string() });
        }
        if self.town(&peasant.town_id).is_none() {
            return Err(WorldError::UnknownTown { peasant: peasant.id, town: peasant.town_id });
        }
        self.peasant_index.insert(peasant.id.clone(), self.peasants.len());
        self.peasants.push(peasant);
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn peasant(&self, id: &AgentId) -> Option<&Peasant> {
        self.peasant_index.get(id).map(|&i| &self.peasants[i])
    }

    pub fn peasant_mut(&mut self, id: &AgentId) -> Option<&mut Peasant> {
        self.peasant_index.get(id).map(|&i| &mut self.peasants[i])
    }

    /// Peasants in insertion order.
    pub fn peasants(&self) -> &[Peasant] {
        &self.peasants
    }

    pub fn town(&self, id: &TownId) -> Option<&Town> {
        self.towns.iter().find(|t| &t.id == id)
    }

    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    pub fn mine(&self, id: &MineId) -> Option<&GoldMine> {
        self.mines.iter().find(|m| &m.id == id)
    }

    pub fn mines(&self) -> &[GoldMine] {
        &self.mines
    }

    pub fn trees(&self) -> &TreeIndex {
        &self.trees
    }

    // ── Economy ───────────────────────────────────────────────────────────

    pub fn economy(&self) -> Economy {
        self.economy
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.economy.gold += amount;
        log::info!("gold earned, total {}", self.economy.gold);
    }

    pub fn add_wood(&mut self, amount: u64) {
        self.economy.wood += amount;
        log::info!("wood collected, total {}", self.economy.wood);
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Simulated time since start.
    #[inline]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Advance the simulation clock by one step.  Called once per tick,
    /// before any agent updates.
    #[inline]
    pub fn advance_clock(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Replace a peasant's task with the first phase of `task`.
    ///
    /// Mining targets the first mine.  Chopping targets `tree` when given,
    /// otherwise leaves the tree unset for lazy resolution.  The phase entry
    /// time is the current simulation time.
    pub fn assign_task(&mut self, id: &AgentId, task: TaskType, tree: Option<Vec3>) -> WorldResult<()> {
        let now = self.now();
        let first_mine = self.mines.first().map(|m| m.id.clone());
        let peasant = self
            .peasant_mut(id)
            .ok_or_else(|| WorldError::UnknownPeasant(id.clone()))?;

        peasant.task = match task {
            TaskType::Idle     => TaskState::Idle,
            TaskType::MineGold => TaskState::MineGold(MiningState::new(first_mine, now)),
            TaskType::ChopWood => TaskState::ChopWood(ChoppingState::new(tree, now)),
        };
        log::info!("peasant {id} assigned to {task}");
        Ok(())
    }
}
