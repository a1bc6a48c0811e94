//! Line-of-sight path smoothing.
//!
//! A raw A* path zig-zags through every cell it visits.  Smoothing keeps
//! only the turning points: from each kept waypoint it jumps to the
//! farthest later waypoint that is still in straight-line view, stopping the
//! scan at the first one that is not.  The result is always a subsequence of
//! the input that keeps its first and last cells.

use crate::Cell;

/// Reduce `path` to the waypoints needed to stay clear of blocked cells.
///
/// Paths of two cells or fewer are returned unchanged.
pub fn smooth_path<F>(path: &[Cell], is_walkable: F) -> Vec<Cell>
where
    F: Fn(Cell) -> bool,
{
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut smoothed = vec![path[0]];
    let mut current = 0;

    while current < path.len() - 1 {
        let mut farthest = current + 1;
        for i in (current + 2)..path.len() {
            if has_line_of_sight(path[current], path[i], &is_walkable) {
                farthest = i;
            } else {
                break;
            }
        }
        smoothed.push(path[farthest]);
        current = farthest;
    }

    smoothed
}

/// `true` if every cell sampled at unit steps strictly between `from` and
/// `to` is walkable.  The endpoints themselves are not checked.
///
/// Samples are taken at `max(|dx|, |dz|)` evenly spaced points and rounded
/// half-up to the nearest cell.
pub fn has_line_of_sight<F>(from: Cell, to: Cell, is_walkable: &F) -> bool
where
    F: Fn(Cell) -> bool,
{
    let dx = (to.x - from.x) as f64;
    let dz = (to.z - from.z) as f64;
    let steps = (to.x - from.x).abs().max((to.z - from.z).abs());

    for i in 1..steps {
        let t = i as f64 / steps as f64;
        let x = round_half_up(from.x as f64 + dx * t);
        let z = round_half_up(from.z as f64 + dz * t);
        if !is_walkable(Cell::new(x, z)) {
            return false;
        }
    }
    true
}

#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
