//! Plain data row types written by output backends.

/// One peasant's position and task at a snapshot step.
#[derive(Debug, Clone, PartialEq)]
pub struct PeasantSnapshotRow {
    pub peasant_id: String,
    /// Simulated milliseconds since start.
    pub time_ms:    u64,
    pub x:          f32,
    pub z:          f32,
    /// Radians about +y; 0 faces +z.
    pub heading:    f32,
    pub task:       &'static str,
    /// Current task phase, or `"idle"`.
    pub phase:      &'static str,
}

/// Resource totals at the step they last changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomyRow {
    pub time_ms: u64,
    pub gold:    u64,
    pub wood:    u64,
}
