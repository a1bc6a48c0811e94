//! `hm-task` — the task state machines that move peasants and pay out.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`context`] | `AgentBody`, `TaskContext<'a>`                                 |
//! | [`tuning`]  | `TaskTuning` (speeds, durations, arrival thresholds)           |
//! | [`travel`]  | `Travel` — waypoint following with periodic re-planning        |
//! | [`mining`]  | `GoldMining` machine                                           |
//! | [`chopping`]| `WoodChopping` machine                                         |
//! | [`manual`]  | `ManualMove` — click-to-move for idle peasants                 |
//! | [`machine`] | `TaskMachine` — tagged dispatch over the cyclic machines       |
//! | [`error`]   | `TaskError`, `TaskResult<T>`                                   |
//!
//! # Design notes
//!
//! Phase and phase-entry time are shared state and live on the peasant in
//! `hm_world::GameState`.  Everything a machine needs only while walking
//! (the cached path, the waypoint cursor, the re-plan timer) lives in the
//! machine itself, owned by the agent registry.  One `update` call borrows
//! the game state mutably and the navigator immutably through a
//! [`TaskContext`], so machines never hold references between ticks.
//!
//! A cycle pays out exactly once: the economy is credited in the same
//! branch that leaves the return-travel phase, and that phase can only be
//! re-entered by completing another work phase.

pub mod chopping;
pub mod context;
pub mod error;
pub mod machine;
pub mod manual;
pub mod mining;
pub mod travel;
pub mod tuning;

#[cfg(test)]
mod tests;

pub use chopping::WoodChopping;
pub use context::{AgentBody, TaskContext};
pub use error::{TaskError, TaskResult};
pub use machine::TaskMachine;
pub use manual::ManualMove;
pub use mining::GoldMining;
pub use travel::{Progress, Travel};
pub use tuning::TaskTuning;
