//! World description file.
//!
//! A world file is a single JSON document:
//!
//! ```json
//! {
//!   "grid":       { "map_size": 400.0, "cell_size": 0.5 },
//!   "towns":      [{ "id": "town_1", "name": "Riverside",
//!                    "position": { "x": -30, "z": -30 },
//!                    "buildings": [{ "model": "house", "position": { "x": 8, "z": 0 },
//!                                    "size": { "x": 4, "y": 4, "z": 4 } }] }],
//!   "gold_mines": [{ "id": "mine_1", "position": { "x": -45, "z": -15 } }],
//!   "trees":      [{ "x": -60, "z": -20 }],
//!   "props":      [{ "model": "well", "position": { "x": 0, "z": 10 },
//!                    "size": { "x": 2, "y": 2, "z": 2 } }],
//!   "peasants":   [{ "id": "peasant_1", "name": "Aldric", "town_id": "town_1",
//!                    "task": "mine_gold" }]
//! }
//! ```
//!
//! Every section is optional.  Building positions are relative to their
//! town; prop positions are absolute.  `y` defaults to 0 everywhere.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hm_core::{Aabb, AgentId, MineId, TaskType, TownId, Vec3};
use hm_nav::GridConfig;
use serde::{Deserialize, Serialize};

use crate::WorldResult;

/// A box-shaped footprint standing on the ground at `position`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxConfig {
    #[serde(default)]
    pub model:    String,
    pub position: Vec3,
    pub size:     Vec3,
}

impl BoxConfig {
    /// World-space bounds, with `origin` added to `position`.
    pub fn bounds(&self, origin: Vec3) -> Aabb {
        let base = origin + self.position;
        let half_x = self.size.x / 2.0;
        let half_z = self.size.z / 2.0;
        Aabb::new(
            Vec3::new(base.x - half_x, base.y, base.z - half_z),
            Vec3::new(base.x + half_x, base.y + self.size.y, base.z + half_z),
        )
    }
}

/// Free-standing scenery.  Props whose model name contains `"mine"` stay
/// walkable; everything else is an obstacle.
pub type PropConfig = BoxConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TownConfig {
    pub id:        TownId,
    pub name:      String,
    pub position:  Vec3,
    #[serde(default)]
    pub buildings: Vec<BoxConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineConfig {
    pub id:       MineId,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeasantConfig {
    pub id:      AgentId,
    pub name:    String,
    pub town_id: TownId,
    #[serde(default)]
    pub task:    TaskType,
}

/// Everything needed to set up a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub grid:       GridConfig,
    pub towns:      Vec<TownConfig>,
    pub gold_mines: Vec<MineConfig>,
    pub trees:      Vec<Vec3>,
    pub props:      Vec<PropConfig>,
    pub peasants:   Vec<PeasantConfig>,
}

impl WorldConfig {
    /// World-space bounds of every building and every non-mine prop.
    pub fn obstacles(&self) -> Vec<Aabb> {
        let buildings = self
            .towns
            .iter()
            .flat_map(|t| t.buildings.iter().map(move |b| b.bounds(t.position)));
        let props = self
            .props
            .iter()
            .filter(|p| !p.model.contains("mine"))
            .map(|p| p.bounds(Vec3::ZERO));
        buildings.chain(props).collect()
    }
}

/// Read a [`WorldConfig`] from a JSON file.
pub fn load_world_json(path: impl AsRef<Path>) -> WorldResult<WorldConfig> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let config = load_world_reader(BufReader::new(file))?;
    log::info!(
        "world loaded from {}: {} towns, {} mines, {} trees, {} peasants",
        path.display(),
        config.towns.len(),
        config.gold_mines.len(),
        config.trees.len(),
        config.peasants.len(),
    );
    Ok(config)
}

/// Read a [`WorldConfig`] from any JSON source.
pub fn load_world_reader<R: Read>(reader: R) -> WorldResult<WorldConfig> {
    Ok(serde_json::from_reader(reader)?)
}
