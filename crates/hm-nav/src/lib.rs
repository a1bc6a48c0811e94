//! `hm-nav` — navigation grid, A* search, smoothing, and the navigator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`grid`]      | `NavGrid` (walkability map), `Cell`, `GridConfig`           |
//! | [`astar`]     | `find_path` over 8-connected cells, `SearchLimits`          |
//! | [`smooth`]    | `smooth_path`, `has_line_of_sight`                          |
//! | [`navigator`] | `Navigator` trait, `GridNavigator`                          |
//! | [`error`]     | `NavError`, `NavResult<T>`                                  |
//!
//! # Pipeline
//!
//! ```text
//! world start/goal ──world_to_grid──► cells ──(snap if blocked)──► A*
//!        ▲                                                          │
//!        └──────── grid_to_world (cell centres, y = 0) ◄── smooth ◄─┘
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridConfig`.           |

pub mod astar;
pub mod error;
pub mod grid;
pub mod navigator;
pub mod smooth;


pub use astar::{find_path, path_cost, SearchLimits};
pub use error::{NavError, NavResult};
pub use grid::{Cell, GridConfig, NavGrid};
pub use navigator::{GridNavigator, Navigator};
pub use smooth::{has_line_of_sight, smooth_path};
