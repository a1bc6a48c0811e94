//! `hm-core` — foundational types for the `hamlet` town simulation.
//!
//! This crate is a dependency of every other `hm-*` crate.  It has no `hm-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TownId`, `MineId`                         |
//! | [`geo`]         | `Vec3`, `Aabb` (ground-plane geometry)                |
//! | [`time`]        | `SimClock`, `SimConfig`                               |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`task`]        | `TaskType` enum                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the `hm-world` JSON loader.                    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod task;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Aabb, Vec3};
pub use ids::{AgentId, MineId, TownId};
pub use rng::SimRng;
pub use task::TaskType;
pub use time::{SimClock, SimConfig};
