//! Simulation observer trait for progress reporting and data collection.

use hm_core::SimClock;
use hm_world::{Economy, GameState};

use crate::AgentRegistry;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — gold ticker
///
/// ```rust,ignore
/// struct GoldTicker { last: u64 }
///
/// impl SimObserver for GoldTicker {
///     fn on_step_end(&mut self, clock: &SimClock, economy: Economy) {
///         if economy.gold != self.last {
///             println!("{clock}: gold = {}", economy.gold);
///             self.last = economy.gold;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the clock advances for a step.
    fn on_step_start(&mut self, _clock: &SimClock) {}

    /// Called after every agent has been updated for the step.
    fn on_step_end(&mut self, _clock: &SimClock, _economy: Economy) {}

    /// Called every `config.output_interval_steps` steps, after
    /// `on_step_end`.
    ///
    /// Read-only access to agent bodies and game state lets output writers
    /// record a snapshot without the sim knowing any output format.
    fn on_snapshot(&mut self, _clock: &SimClock, _registry: &AgentRegistry, _state: &GameState) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
