//! `hm-world` — the shared, mutable game state every task machine works on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`entity`]   | `Town`, `GoldMine`, `Peasant`, `Economy`                     |
//! | [`task`]     | `TaskState` and the per-task phase/state types               |
//! | [`trees`]    | `TreeIndex` (R-tree over tree positions)                     |
//! | [`state`]    | `GameState` (entities + economy + simulation clock)          |
//! | [`config`]   | `WorldConfig` (serde) and the JSON loaders                   |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                               |
//!
//! Agent positions are not stored here; the agent registry in `hm-sim` owns
//! them.  `GameState` holds only what the task logic reads and writes by id.

pub mod config;
pub mod entity;
pub mod error;
pub mod state;
pub mod task;
pub mod trees;


pub use config::{
    load_world_json, load_world_reader, BoxConfig, MineConfig, PeasantConfig, PropConfig,
    TownConfig, WorldConfig,
};
pub use entity::{Economy, GoldMine, Peasant, Town};
pub use error::{WorldError, WorldResult};
pub use state::GameState;
pub use task::{ChoppingPhase, ChoppingState, MiningPhase, MiningState, TaskState};
pub use trees::TreeIndex;
