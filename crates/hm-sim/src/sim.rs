//! The `Sim` struct and its tick loop.

use std::time::Duration;

use hm_core::{AgentId, SimConfig, TaskType, Vec3};
use hm_nav::{GridNavigator, Navigator};
use hm_task::TaskTuning;
use hm_world::{Economy, GameState};

use crate::{AgentRegistry, FixedStep, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<N>` owns the game state, the agent runtimes and the navigator, and
/// drives the fixed-step loop:
///
/// 1. **Clock**: advance simulated time by one step.
/// 2. **Agents**: update each agent in spawn order via
///    [`AgentRegistry::tick`].
///
/// Commands ([`assign_task`][Sim::assign_task], [`move_to`][Sim::move_to])
/// take effect on the next step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: Navigator = GridNavigator> {
    /// Step rate, run length, seed, snapshot interval.
    pub config: SimConfig,

    /// Speeds, work and wait durations, arrival thresholds.
    pub tuning: TaskTuning,

    /// Towns, mines, trees, peasants' task state, economy, and clock.
    pub state: GameState,

    /// Agent bodies, task machines, and manual moves.
    pub registry: AgentRegistry,

    /// Path planner shared by every agent.
    pub navigator: N,
}

impl<N: Navigator> Sim<N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the clock reaches `config.total_steps`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.state.clock().steps() < self.config.total_steps {
            self.step_observed(observer);
        }
        observer.on_sim_end(self.state.clock());
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores
    /// `total_steps`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer);
        }
        Ok(())
    }

    /// Feed one rendered frame of length `frame` through `stepper` and run
    /// the resulting fixed steps.
    ///
    /// Returns the interpolation factor left in the accumulator.
    pub fn frame<O: SimObserver>(&mut self, stepper: &mut FixedStep, frame: Duration, observer: &mut O) -> f32 {
        for _ in 0..stepper.advance(frame) {
            self.step_observed(observer);
        }
        stepper.alpha()
    }

    /// One fixed step without observer hooks.
    pub fn step(&mut self) {
        let dt = self.config.step_duration();
        self.state.advance_clock(dt);
        self.registry.tick(dt, &mut self.state, &self.navigator, &self.tuning);
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Put agent `id` on `task` from its first phase.  `tree` pins a
    /// chop-wood target; without it the nearest tree is used.
    pub fn assign_task(&mut self, id: &AgentId, task: TaskType, tree: Option<Vec3>) -> SimResult<()> {
        self.registry.assign_task(id, task, tree, &mut self.state)
    }

    /// Send agent `id` walking towards `target`.
    pub fn move_to(&mut self, id: &AgentId, target: Vec3) -> SimResult<()> {
        self.registry.move_to(id, target, &self.navigator)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn economy(&self) -> Economy {
        self.state.economy()
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.state.now()
    }

    pub fn position(&self, id: &AgentId) -> Option<Vec3> {
        self.registry.position(id)
    }

    pub fn task(&self, id: &AgentId) -> Option<TaskType> {
        self.state.peasant(id).map(|p| p.task_type())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_step_start(self.state.clock());
        self.step();
        let clock = *self.state.clock();
        observer.on_step_end(&clock, self.state.economy());
        let interval = self.config.output_interval_steps;
        if interval > 0 && clock.steps().is_multiple_of(interval) {
            observer.on_snapshot(&clock, &self.registry, &self.state);
        }
    }
}
