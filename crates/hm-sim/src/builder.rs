//! Fluent builder for constructing a [`Sim`].

use hm_core::{SimConfig, SimRng, Vec3};
use hm_nav::{GridNavigator, Navigator};
use hm_task::TaskTuning;
use hm_world::{GameState, WorldConfig, WorldError};

use crate::{AgentRegistry, Sim, SimResult};

/// Default half-extent of the square peasants spawn in around their town.
pub const DEFAULT_SPAWN_JITTER: f32 = 2.0;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step rate, run length, seed, …
/// - [`WorldConfig`] — towns, mines, trees, props, peasants, grid settings
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.tuning(t)`         | `TaskTuning::default()`          |
/// | `.spawn_jitter(h)`   | `DEFAULT_SPAWN_JITTER` (±2)      |
///
/// [`build`][SimBuilder::build] rasterises the world's buildings and
/// non-mine props onto a fresh [`GridNavigator`];
/// [`build_with`][SimBuilder::build_with] takes any navigator instead.
///
/// # Example
///
/// ```rust,ignore
/// let world = hm_world::load_world_json("world.json")?;
/// let mut sim = SimBuilder::new(SimConfig::default(), world)
///     .spawn_jitter(0.0)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    world:        WorldConfig,
    tuning:       TaskTuning,
    spawn_jitter: f32,
}

impl SimBuilder {
    pub fn new(config: SimConfig, world: WorldConfig) -> Self {
        Self {
            config,
            world,
            tuning:       TaskTuning::default(),
            spawn_jitter: DEFAULT_SPAWN_JITTER,
        }
    }

    pub fn tuning(mut self, tuning: TaskTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Peasants spawn uniformly within `±half_extent` of their town on x
    /// and z.  Zero spawns them exactly at the town position.
    pub fn spawn_jitter(mut self, half_extent: f32) -> Self {
        self.spawn_jitter = half_extent;
        self
    }

    /// Build with a grid navigator generated from the world's obstacles.
    ///
    /// # Errors
    ///
    /// Invalid grid, sim, or tuning settings, and any world validation
    /// error (see [`GameState::from_config`]).
    pub fn build(self) -> SimResult<Sim<GridNavigator>> {
        let mut navigator = GridNavigator::from_config(&self.world.grid)?;
        let padding = self.world.grid.obstacle_padding;
        let obstacles = self.world.obstacles();
        let blocked: usize = obstacles
            .iter()
            .map(|&bounds| navigator.mark_obstacle(bounds, padding))
            .sum();
        log::info!(
            "navigation grid {}x{}: {} obstacles, {blocked} cells blocked",
            navigator.grid().width(),
            navigator.grid().height(),
            obstacles.len(),
        );
        self.build_with(navigator)
    }

    /// Build with a caller-supplied navigator.
    pub fn build_with<N: Navigator>(self, navigator: N) -> SimResult<Sim<N>> {
        self.config.validate()?;
        self.tuning.validate()?;

        let state = GameState::from_config(&self.world)?;

        let mut rng = SimRng::new(self.config.seed);
        let mut registry = AgentRegistry::new();
        for peasant in state.peasants() {
            let town = state.town(&peasant.town_id).ok_or_else(|| WorldError::UnknownTown {
                peasant: peasant.id.clone(),
                town:    peasant.town_id.clone(),
            })?;
            let position = Vec3::ground(
                town.position.x + rng.jitter(self.spawn_jitter),
                town.position.z + rng.jitter(self.spawn_jitter),
            );
            registry.spawn(peasant.id.clone(), position)?;
        }

        log::info!(
            "world ready: {} towns, {} mines, {} trees, {} peasants",
            state.towns().len(),
            state.mines().len(),
            state.trees().len(),
            registry.len(),
        );

        Ok(Sim {
            config: self.config,
            tuning: self.tuning,
            state,
            registry,
            navigator,
        })
    }
}
