//! The navigation grid: world ↔ cell mapping and the walkability map.
//!
//! The grid is a square of `width × height` cells laid over a square map of
//! side `map_size`, centred on the world origin.  World coordinates are
//! shifted by `offset = map_size / 2` before being divided by `cell_size`,
//! so the map spans `[-offset, offset)` on both axes.
//!
//! Walkability is a flat `Vec<bool>` in x-major order.  Cells start walkable
//! and only ever become blocked, through [`NavGrid::mark_obstacle`].

use hm_core::{Aabb, Vec3};

use crate::{NavError, NavResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Integer grid coordinate.  May lie outside the grid; such cells are never
/// walkable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self { x: self.x.saturating_add(dx), z: self.z.saturating_add(dz) }
    }

    /// Euclidean distance in cell units.
    #[inline]
    pub fn distance(self, other: Cell) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dz = (other.z - self.z) as f32;
        (dx * dx + dz * dz).sqrt()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Grid dimensions and navigator tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Side length of the square map in world units.  Default: 400.
    pub map_size: f32,

    /// World units per cell.  Default: 0.5.
    pub cell_size: f32,

    /// Clearance added around every obstacle footprint.  Default: 0.5.
    pub obstacle_padding: f32,

    /// Largest Chebyshev ring searched when an endpoint is blocked.
    /// Default: 200.
    pub max_snap_radius: i32,

    /// Optional A* node-expansion ceiling.  `None` (default) searches until
    /// the open set is exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            map_size:         400.0,
            cell_size:        0.5,
            obstacle_padding: 0.5,
            max_snap_radius:  200,
            max_expansions:   None,
        }
    }
}

// ── NavGrid ───────────────────────────────────────────────────────────────────

/// Boolean walkability map over a uniform square grid.
#[derive(Clone, Debug)]
pub struct NavGrid {
    cell_size: f32,
    offset:    f32,
    width:     i32,
    height:    i32,
    /// `walkable[x * height + z]`.
    walkable:  Vec<bool>,
}

impl NavGrid {
    /// Create an all-walkable grid covering a `map_size` square.
    pub fn new(map_size: f32, cell_size: f32) -> NavResult<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(NavError::InvalidGrid(format!("cell size {cell_size} must be positive")));
        }
        if !map_size.is_finite() || map_size <= 0.0 {
            return Err(NavError::InvalidGrid(format!("map size {map_size} must be positive")));
        }

        let cells_per_side = (map_size / cell_size).ceil();
        if cells_per_side > i32::MAX as f32 {
            return Err(NavError::InvalidGrid(format!(
                "{cells_per_side} cells per side is too many"
            )));
        }
        let side = cells_per_side as i32;

        log::info!("navigation grid initialised: {side}x{side} cells ({cell_size} unit resolution)");

        Ok(Self {
            cell_size,
            offset: map_size / 2.0,
            width: side,
            height: side,
            walkable: vec![true; side as usize * side as usize],
        })
    }

    /// Create the grid described by `config`.
    pub fn from_config(config: &GridConfig) -> NavResult<Self> {
        Self::new(config.map_size, config.cell_size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    /// Cell containing world point `(x, z)`.
    #[inline]
    pub fn world_to_grid(&self, x: f32, z: f32) -> Cell {
        Cell {
            x: ((x + self.offset) / self.cell_size).floor() as i32,
            z: ((z + self.offset) / self.cell_size).floor() as i32,
        }
    }

    /// World `(x, z)` of the centre of `cell`.
    #[inline]
    pub fn grid_to_world(&self, cell: Cell) -> (f32, f32) {
        let half = self.cell_size / 2.0;
        (
            cell.x as f32 * self.cell_size - self.offset + half,
            cell.z as f32 * self.cell_size - self.offset + half,
        )
    }

    /// `cell` pulled to within one cell of the map border.
    #[inline]
    pub fn clamp_to_border(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.clamp(-1, self.width()),
            z: cell.z.clamp(-1, self.height()),
        }
    }

    /// Ground-plane centre of `cell` as a world point.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> Vec3 {
        let (x, z) = self.grid_to_world(cell);
        Vec3::ground(x, z)
    }

    // ── Walkability ───────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.z >= 0 && cell.z < self.height
    }

    /// `false` outside the grid, otherwise the stored flag.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.walkable[self.index(cell)]
    }

    /// Block every cell under `bounds` grown by `padding` on x/z.
    ///
    /// Corners are converted with [`world_to_grid`](Self::world_to_grid) and
    /// the rectangle between them is blocked inclusively; cells outside the
    /// grid are ignored.  Returns how many cells changed from walkable to
    /// blocked, so re-marking the same box returns 0.
    pub fn mark_obstacle(&mut self, bounds: Aabb, padding: f32) -> usize {
        let padded = bounds.padded_xz(padding);
        let lo = self.world_to_grid(padded.min.x, padded.min.z);
        let hi = self.world_to_grid(padded.max.x, padded.max.z);

        let x0 = lo.x.max(0);
        let x1 = hi.x.min(self.width - 1);
        let z0 = lo.z.max(0);
        let z1 = hi.z.min(self.height - 1);

        let mut newly_blocked = 0;
        for x in x0..=x1 {
            for z in z0..=z1 {
                let i = self.index(Cell { x, z });
                if self.walkable[i] {
                    self.walkable[i] = false;
                    newly_blocked += 1;
                }
            }
        }
        newly_blocked
    }

    // ── Debug queries ─────────────────────────────────────────────────────

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| !w).count()
    }

    /// World-space centres of every blocked cell, for debug overlays.
    pub fn blocked_cells(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.blocked_count());
        for x in 0..self.width {
            for z in 0..self.height {
                let cell = Cell { x, z };
                if !self.walkable[self.index(cell)] {
                    out.push(self.cell_center(cell));
                }
            }
        }
        out
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.x as usize * self.height as usize + cell.z as usize
    }
}
