//! World-space path planning.
//!
//! # Pluggability
//!
//! Tasks call planning through the [`Navigator`] trait, so tests and
//! applications can substitute scripted or alternative planners without
//! touching task logic.  The default [`GridNavigator`] runs A* over a
//! [`NavGrid`] and smooths the result.

use hm_core::{Aabb, Vec3};

use crate::astar::{self, SearchLimits};
use crate::smooth::smooth_path;
use crate::{Cell, GridConfig, NavError, NavGrid, NavResult};

// ── Navigator trait ───────────────────────────────────────────────────────────

/// Pluggable path planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single planner can be shared
/// behind an `Arc` by every task in the simulation.
pub trait Navigator: Send + Sync {
    /// Plan a path from `start` to `goal`.
    ///
    /// Returns a non-empty sequence of ground-plane waypoints (y = 0).  The
    /// first waypoint is the centre of the start cell and the last is the
    /// centre of the goal cell (or of the nearest walkable cells when either
    /// endpoint is blocked).
    fn plan(&self, start: Vec3, goal: Vec3) -> NavResult<Vec<Vec3>>;

    /// [`plan`](Self::plan), with every failure collapsed into `None`.
    ///
    /// Callers treat `None` as "move straight at the target instead".
    fn find_path(&self, start: Vec3, goal: Vec3) -> Option<Vec<Vec3>> {
        match self.plan(start, goal) {
            Ok(path) if !path.is_empty() => Some(path),
            Ok(_) => None,
            Err(e) => {
                log::debug!("path from {start} to {goal} unavailable: {e}");
                None
            }
        }
    }
}

// ── GridNavigator ─────────────────────────────────────────────────────────────

/// A* over a [`NavGrid`] with blocked-endpoint snapping and line-of-sight
/// smoothing.
#[derive(Clone, Debug)]
pub struct GridNavigator {
    grid:            NavGrid,
    max_snap_radius: i32,
    limits:          SearchLimits,
}

impl GridNavigator {
    pub fn new(grid: NavGrid) -> Self {
        let defaults = GridConfig::default();
        Self {
            grid,
            max_snap_radius: defaults.max_snap_radius,
            limits: SearchLimits { max_expansions: defaults.max_expansions },
        }
    }

    /// Build an all-walkable grid and navigator from `config`.
    pub fn from_config(config: &GridConfig) -> NavResult<Self> {
        Ok(Self {
            grid:            NavGrid::from_config(config)?,
            max_snap_radius: config.max_snap_radius,
            limits:          SearchLimits { max_expansions: config.max_expansions },
        })
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_snap_radius(mut self, radius: i32) -> Self {
        self.max_snap_radius = radius;
        self
    }

    #[inline]
    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut NavGrid {
        &mut self.grid
    }

    /// Block the cells under `bounds` (plus `padding`).  See
    /// [`NavGrid::mark_obstacle`].
    pub fn mark_obstacle(&mut self, bounds: Aabb, padding: f32) -> usize {
        self.grid.mark_obstacle(bounds, padding)
    }

    /// Closest walkable cell to `cell` by expanding square rings.
    ///
    /// Returns `cell` itself when it is walkable.  Otherwise rings of
    /// Chebyshev radius 1, 2, … up to the snap radius are scanned (x outer,
    /// z inner, perimeter only) and the first walkable cell wins.  Cells far
    /// outside the map are first clamped to just beyond the border.
    pub fn nearest_walkable(&self, cell: Cell) -> Option<Cell> {
        let cell = self.grid.clamp_to_border(cell);
        if self.grid.is_walkable(cell) {
            return Some(cell);
        }
        for r in 1..=self.max_snap_radius {
            for dx in -r..=r {
                for dz in -r..=r {
                    if dx.abs() != r && dz.abs() != r {
                        continue;
                    }
                    let candidate = cell.offset(dx, dz);
                    if self.grid.is_walkable(candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }
}

impl Navigator for GridNavigator {
    fn plan(&self, start: Vec3, goal: Vec3) -> NavResult<Vec<Vec3>> {
        let raw_start = self.grid.world_to_grid(start.x, start.z);
        let raw_goal = self.grid.world_to_grid(goal.x, goal.z);

        let Some(start_cell) = self.nearest_walkable(raw_start) else {
            log::warn!("start {start} is blocked with no walkable cell within {} rings", self.max_snap_radius);
            return Err(NavError::StartBlocked(raw_start));
        };
        let Some(goal_cell) = self.nearest_walkable(raw_goal) else {
            log::warn!("goal {goal} is blocked with no walkable cell within {} rings", self.max_snap_radius);
            return Err(NavError::GoalBlocked(raw_goal));
        };

        let walkable = |c: Cell| self.grid.is_walkable(c);
        let cells = astar::find_path(start_cell, goal_cell, walkable, self.limits)?;
        let smoothed = smooth_path(&cells, walkable);

        Ok(smoothed.into_iter().map(|c| self.grid.cell_center(c)).collect())
    }
}
