//! Per-call borrows handed to every task machine update.

use hm_core::Vec3;
use hm_nav::Navigator;
use hm_world::GameState;

use crate::TaskTuning;

/// Where an agent is and which way it faces.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AgentBody {
    pub position: Vec3,
    /// Rotation about +y in radians; 0 faces +z.
    pub heading:  f32,
}

impl AgentBody {
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self { position, heading: 0.0 }
    }
}

/// Mutable game state plus the shared navigator, borrowed for one update.
///
/// # Lifetimes
///
/// All borrows live for a single `update` call.  The registry rebuilds the
/// context for every agent so no machine can hold on to the state.
pub struct TaskContext<'a> {
    pub state:     &'a mut GameState,
    pub navigator: &'a dyn Navigator,
    pub tuning:    &'a TaskTuning,
}

impl<'a> TaskContext<'a> {
    #[inline]
    pub fn new(
        state:     &'a mut GameState,
        navigator: &'a dyn Navigator,
        tuning:    &'a TaskTuning,
    ) -> Self {
        Self { state, navigator, tuning }
    }
}
