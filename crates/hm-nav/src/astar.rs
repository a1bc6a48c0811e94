//! A* search over 8-connected grid cells.
//!
//! # Cost model
//!
//! | Move       | Cost |
//! |------------|------|
//! | orthogonal | 1    |
//! | diagonal   | √2   |
//!
//! The heuristic is the Euclidean distance in cell units.  It never
//! overestimates the remaining cost and satisfies the triangle inequality
//! for this cost model, so expanded cells are final and the returned path is
//! cost-optimal.
//!
//! # Node storage
//!
//! Nodes live in an arena `Vec<Node>`; an `FxHashMap<Cell, usize>` maps each
//! cell to its one arena slot, and parents are arena indices.  Improving a
//! node's cost overwrites `g`, `f`, and `parent` in place and pushes a fresh
//! heap entry; the outdated entry is skipped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f32::consts::SQRT_2;

use rustc_hash::FxHashMap;

use crate::{Cell, NavError, NavResult};

pub const ORTHOGONAL_COST: f32 = 1.0;
pub const DIAGONAL_COST: f32 = SQRT_2;

/// West, east, north, south, then the four diagonals.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Bounds on a single search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Give up with [`NavError::ExpansionLimit`] after expanding this many
    /// nodes.  `None` never gives up early.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits { max_expansions: None };
}

// ── Search internals ──────────────────────────────────────────────────────────

struct Node {
    cell:   Cell,
    g:      f32,
    f:      f32,
    parent: Option<usize>,
    closed: bool,
}

/// Heap entry.  Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `f` first; equal `f` pops the earliest push.
struct OpenEntry {
    f:    f32,
    seq:  u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find a minimum-cost path from `start` to `goal`.
///
/// `is_walkable` is consulted for every neighbour before it is opened; the
/// start cell itself is never checked (the navigator snaps blocked
/// endpoints before calling this).  Returns the full cell sequence,
/// `start` and `goal` inclusive.  `start == goal` yields `[start]`.
///
/// # Errors
///
/// [`NavError::NoPath`] when the open set empties without reaching `goal`;
/// [`NavError::ExpansionLimit`] when `limits.max_expansions` is hit first.
pub fn find_path<F>(
    start:       Cell,
    goal:        Cell,
    is_walkable: F,
    limits:      SearchLimits,
) -> NavResult<Vec<Cell>>
where
    F: Fn(Cell) -> bool,
{
    let mut nodes: Vec<Node> = Vec::new();
    let mut index: FxHashMap<Cell, usize> = FxHashMap::default();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut expanded: usize = 0;

    let h0 = start.distance(goal);
    nodes.push(Node { cell: start, g: 0.0, f: h0, parent: None, closed: false });
    index.insert(start, 0);
    open.push(OpenEntry { f: h0, seq, node: 0 });

    while let Some(OpenEntry { f, node: current, .. }) = open.pop() {
        // Skip entries superseded by a cheaper push or already expanded.
        if nodes[current].closed || f > nodes[current].f {
            continue;
        }

        let cell = nodes[current].cell;
        if cell == goal {
            return Ok(reconstruct(&nodes, current));
        }

        if let Some(limit) = limits.max_expansions {
            if expanded >= limit {
                return Err(NavError::ExpansionLimit { limit });
            }
        }
        expanded += 1;
        nodes[current].closed = true;

        let g_current = nodes[current].g;
        for (dx, dz) in NEIGHBOURS {
            let next = cell.offset(dx, dz);
            let existing = index.get(&next).copied();

            if existing.is_some_and(|i| nodes[i].closed) {
                continue;
            }
            if !is_walkable(next) {
                continue;
            }

            let step = if dx != 0 && dz != 0 { DIAGONAL_COST } else { ORTHOGONAL_COST };
            let tentative_g = g_current + step;

            let slot = match existing {
                None => {
                    let h = next.distance(goal);
                    nodes.push(Node {
                        cell:   next,
                        g:      tentative_g,
                        f:      tentative_g + h,
                        parent: Some(current),
                        closed: false,
                    });
                    let slot = nodes.len() - 1;
                    index.insert(next, slot);
                    slot
                }
                Some(slot) if tentative_g < nodes[slot].g => {
                    let h = nodes[slot].f - nodes[slot].g;
                    let node = &mut nodes[slot];
                    node.g = tentative_g;
                    node.f = tentative_g + h;
                    node.parent = Some(current);
                    slot
                }
                Some(_) => continue,
            };

            seq += 1;
            open.push(OpenEntry { f: nodes[slot].f, seq, node: slot });
        }
    }

    Err(NavError::NoPath { from: start, to: goal })
}

fn reconstruct(nodes: &[Node], goal: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        path.push(nodes[i].cell);
        cur = nodes[i].parent;
    }
    path.reverse();
    path
}

/// Total Euclidean length of a cell path, in cell units.
///
/// For a raw A* path this is exactly the search cost (every step is 1 or
/// √2); for a smoothed path it is the straight-line length of its legs.
pub fn path_cost(path: &[Cell]) -> f32 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}
