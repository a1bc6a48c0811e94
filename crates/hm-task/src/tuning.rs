//! Speeds, timers, and arrival thresholds.

use std::time::Duration;

use crate::{TaskError, TaskResult};

/// Tuning shared by every task machine.  The defaults are the game's
/// standard values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TaskTuning {
    /// Units per second while on a task.  Default: 2.5.
    pub walk_speed:       f32,
    /// Units per second under manual command.  Default: 5.0.
    pub manual_speed:     f32,
    /// Time spent mining or chopping.  Default: 5 s.
    pub work_duration:    Duration,
    /// Rest in town between cycles.  Default: 5 s.
    pub wait_duration:    Duration,
    /// Travel re-plans from the current position this often.  Default: 5 s.
    pub recalc_interval:  Duration,
    /// A waypoint counts as reached within this distance.  Default: 0.5.
    pub waypoint_reach:   f32,
    /// Arrival radius at a mine or tree.  Default: 1.0.
    pub site_arrival:     f32,
    /// Arrival radius at the home town.  Default: 2.0.
    pub town_arrival:     f32,
}

impl Default for TaskTuning {
    fn default() -> Self {
        Self {
            walk_speed:      2.5,
            manual_speed:    5.0,
            work_duration:   Duration::from_millis(5_000),
            wait_duration:   Duration::from_millis(5_000),
            recalc_interval: Duration::from_secs(5),
            waypoint_reach:  0.5,
            site_arrival:    1.0,
            town_arrival:    2.0,
        }
    }
}

impl TaskTuning {
    pub fn validate(&self) -> TaskResult<()> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("manual_speed", self.manual_speed),
            ("waypoint_reach", self.waypoint_reach),
            ("site_arrival", self.site_arrival),
            ("town_arrival", self.town_arrival),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(TaskError::Config(format!("{name} must be positive, got {v}")));
            }
        }
        if self.recalc_interval.is_zero() {
            return Err(TaskError::Config("recalc_interval must be non-zero".into()));
        }
        Ok(())
    }
}
