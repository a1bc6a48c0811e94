//! Fixed-timestep accumulator for hosts that render at a variable rate.

use std::time::Duration;

use hm_core::SimConfig;

/// Turns variable frame times into a whole number of fixed steps.
///
/// Each frame's elapsed time is added to an accumulator and one step is
/// taken per full step length.  At most `max_steps` are taken per frame;
/// when the cap is hit with a full step still owed, the backlog is dropped
/// so a long stall cannot trigger a catch-up spiral.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step:        Duration,
    max_steps:   u32,
    accumulator: Duration,
}

impl FixedStep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self { step, max_steps: max_steps.max(1), accumulator: Duration::ZERO }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.step_duration(), config.max_steps_per_frame)
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time carried over to the next frame.
    #[inline]
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Add `frame` to the accumulator and return how many steps to run.
    pub fn advance(&mut self, frame: Duration) -> u32 {
        self.accumulator += frame;
        let mut steps = 0;
        while self.accumulator >= self.step {
            if steps == self.max_steps {
                log::debug!("dropping {:?} of step backlog", self.accumulator);
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`, for
    /// interpolating rendered positions between steps.
    pub fn alpha(&self) -> f32 {
        if self.step.is_zero() {
            return 0.0;
        }
        (self.accumulator.as_secs_f64() / self.step.as_secs_f64()) as f32
    }
}
