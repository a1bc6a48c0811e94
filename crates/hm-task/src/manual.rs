//! Click-to-move for peasants without a task.
//!
//! Differs from task travel in three ways: the first path is planned when
//! the command is given rather than on the first tick, a failed re-plan
//! drops the cached path (falling back to a straight line), and arrival is
//! simply reaching the last movement target.

use std::time::Duration;

use hm_core::Vec3;
use hm_nav::Navigator;

use crate::travel::walk_toward;
use crate::{AgentBody, TaskTuning, Travel};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualMove {
    target: Option<Vec3>,
    travel: Travel,
}

impl ManualMove {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a target is pending.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    #[inline]
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    #[inline]
    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    /// Start moving from `from` to `target` (projected onto the ground).
    pub fn command(&mut self, from: Vec3, target: Vec3, navigator: &dyn Navigator) {
        let target = target.flatten();
        self.travel.reset();
        match navigator.find_path(from, target) {
            Some(path) => {
                log::debug!("path found: {} waypoints to {target}", path.len());
                self.travel.replace(Some(path));
            }
            None => log::warn!("no path to {target}, using direct movement"),
        }
        self.target = Some(target);
    }

    /// Drop any pending target.
    pub fn cancel(&mut self) {
        self.target = None;
        self.travel.reset();
    }

    /// Advance one tick at the manual speed.  Does nothing without a target.
    pub fn update(&mut self, dt: Duration, body: &mut AgentBody, navigator: &dyn Navigator, tuning: &TaskTuning) {
        let Some(target) = self.target else { return };

        if self.travel.tick_timer(dt, tuning.recalc_interval) {
            let path = navigator.find_path(body.position, target);
            if path.is_none() {
                log::warn!("no path to {target}, using direct movement");
            }
            self.travel.replace(path);
        }

        let current = self.travel.current_target(target);
        if body.position.ground_distance(current) < tuning.waypoint_reach {
            if self.travel.has_next_waypoint() {
                self.travel.advance_cursor();
            } else {
                self.cancel();
            }
        } else {
            walk_toward(body, current, tuning.manual_speed, dt);
        }
    }
}
