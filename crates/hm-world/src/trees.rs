//! Spatial index over tree positions.
//!
//! Trees are not obstacles and never move, so the index is bulk-loaded once
//! at world construction.  Queries are on the ground plane only.

use hm_core::Vec3;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

#[derive(Clone, Debug)]
struct TreeEntry {
    point: [f32; 2], // [x, z]
    index: usize,
}

impl RTreeObject for TreeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TreeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

/// Tree positions plus an R-tree for nearest-tree lookups.
#[derive(Clone, Debug, Default)]
pub struct TreeIndex {
    positions: Vec<Vec3>,
    rtree:     RTree<TreeEntry>,
}

impl TreeIndex {
    pub fn new(positions: Vec<Vec3>) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(index, p)| TreeEntry { point: [p.x, p.z], index })
            .collect();
        Self { rtree: RTree::bulk_load(entries), positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Tree closest to `from` on the ground plane.  `None` only when there
    /// are no trees.
    pub fn nearest(&self, from: Vec3) -> Option<Vec3> {
        self.rtree
            .nearest_neighbor(&[from.x, from.z])
            .map(|e| self.positions[e.index])
    }
}
