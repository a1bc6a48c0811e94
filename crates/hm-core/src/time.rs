//! Simulation time model.
//!
//! # Design
//!
//! The simulation advances in fixed steps (conventionally 1/60 s).  The
//! canonical time value is the elapsed simulated [`Duration`] since the
//! start of the run, held in [`SimClock`] alongside the step counter.  Task
//! phases record the clock value at phase entry and compare against it, so
//! nothing in the core ever reads the wall clock.
//!
//! `Duration` has nanosecond resolution, comfortably finer than the
//! millisecond resolution the task timers work in.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic simulated time since the start of the run.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    elapsed: Duration,
    steps:   u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one step of length `dt`.
    #[inline]
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.steps += 1;
    }

    /// Simulated time since start.
    #[inline]
    pub fn now(&self) -> Duration {
        self.elapsed
    }

    /// Simulated milliseconds since start, for logs and output rows.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Time elapsed since `earlier` (saturates at zero).
    #[inline]
    pub fn since(&self, earlier: Duration) -> Duration {
        self.elapsed.saturating_sub(earlier)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{} ({:.3} s)", self.steps, self.elapsed.as_secs_f64())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded alongside the world file by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Fixed update rate.  Default: 60 steps per simulated second.
    pub step_hz: u32,

    /// Upper bound on catch-up steps per rendered frame.  Any backlog beyond
    /// this is dropped.  Default: 5.
    pub max_steps_per_frame: u32,

    /// Total steps for `Sim::run`.  At 60 Hz, 3 600 = one simulated minute.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Report a snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_hz:               60,
            max_steps_per_frame:   5,
            total_steps:           3_600,
            seed:                  42,
            output_interval_steps: 60,
        }
    }
}

impl SimConfig {
    /// Length of one fixed step.
    #[inline]
    pub fn step_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.step_hz.max(1)))
    }

    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.step_hz == 0 {
            return Err(CoreError::Config("step_hz must be positive".into()));
        }
        if self.max_steps_per_frame == 0 {
            return Err(CoreError::Config("max_steps_per_frame must be positive".into()));
        }
        Ok(())
    }
}
