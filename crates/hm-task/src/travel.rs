//! Waypoint following for the travel phases of the cyclic tasks.
//!
//! # Per-tick algorithm
//!
//! 1. No cached path: ask the navigator for one.  A miss leaves the path
//!    empty and the agent walks straight at the destination.
//! 2. Add `dt` to the re-plan timer; once it reaches the interval, plan
//!    again from the current position, adopt the result if there is one,
//!    and zero the timer.
//! 3. Steer at the current waypoint, or at the destination when no
//!    waypoints remain.
//! 4. Within `waypoint_reach` of that target: advance the cursor if more
//!    waypoints follow, otherwise test the arrival radius against the real
//!    destination.  Otherwise step toward the target.
//!
//! Arrival clears the path, cursor, and timer.

use std::time::Duration;

use hm_core::Vec3;
use hm_nav::Navigator;

use crate::{AgentBody, TaskTuning};

/// Outcome of one [`Travel::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    EnRoute,
    Arrived,
}

/// Movement runtime for one travel leg.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Travel {
    path:         Option<Vec<Vec3>>,
    cursor:       usize,
    recalc_timer: Duration,
}

impl Travel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn path(&self) -> Option<&[Vec3]> {
        self.path.as_deref()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn recalc_timer(&self) -> Duration {
        self.recalc_timer
    }

    /// Drop the cached leg.
    pub fn reset(&mut self) {
        self.path = None;
        self.cursor = 0;
        self.recalc_timer = Duration::ZERO;
    }

    /// Advance one tick toward `destination` at the tuned walk speed.
    ///
    /// `arrive_within` is the final arrival radius (site or town).  The
    /// destination is projected onto the ground and distances ignore y.
    pub fn step(
        &mut self,
        dt:            Duration,
        body:          &mut AgentBody,
        destination:   Vec3,
        arrive_within: f32,
        navigator:     &dyn Navigator,
        tuning:        &TaskTuning,
    ) -> Progress {
        let destination = destination.flatten();
        if self.path.is_none() {
            match navigator.find_path(body.position, destination) {
                Some(path) => {
                    log::debug!("path found: {} waypoints to {destination}", path.len());
                    self.path = Some(path);
                    self.cursor = 0;
                    self.recalc_timer = Duration::ZERO;
                }
                None => log::warn!("no path to {destination}, using direct movement"),
            }
        }

        if self.tick_timer(dt, tuning.recalc_interval) {
            if let Some(path) = navigator.find_path(body.position, destination) {
                log::debug!("path recalculated: {} waypoints to {destination}", path.len());
                self.replace(Some(path));
            }
        }

        let target = self.current_target(destination);
        if body.position.ground_distance(target) < tuning.waypoint_reach {
            if self.has_next_waypoint() {
                self.advance_cursor();
            } else if body.position.ground_distance(destination) < arrive_within {
                self.reset();
                return Progress::Arrived;
            }
        } else {
            walk_toward(body, target, tuning.walk_speed, dt);
        }
        Progress::EnRoute
    }

    pub(crate) fn current_target(&self, destination: Vec3) -> Vec3 {
        match &self.path {
            Some(path) if self.cursor < path.len() => path[self.cursor],
            _ => destination,
        }
    }

    pub(crate) fn has_next_waypoint(&self) -> bool {
        self.path.as_ref().is_some_and(|p| self.cursor + 1 < p.len())
    }

    /// Replace the leg with `path`, or clear it on `None`.
    pub(crate) fn replace(&mut self, path: Option<Vec<Vec3>>) {
        self.path = path;
        self.cursor = 0;
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor += 1;
    }

    pub(crate) fn tick_timer(&mut self, dt: Duration, interval: Duration) -> bool {
        self.recalc_timer += dt;
        if self.recalc_timer >= interval {
            self.recalc_timer = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

/// Move `body` `speed * dt` toward `target` along the ground and face along
/// the move.
pub(crate) fn walk_toward(body: &mut AgentBody, target: Vec3, speed: f32, dt: Duration) {
    if let Some(dir) = (target - body.position).flatten().normalized() {
        body.position = body.position.add_scaled(dir, speed * dt.as_secs_f32());
        body.heading = Vec3::yaw(dir);
    }
}
