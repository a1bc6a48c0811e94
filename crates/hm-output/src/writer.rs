//! The `OutputWriter` trait implemented by backend writers.

use crate::{EconomyRow, OutputResult, PeasantSnapshotRow};

/// Sink for simulation output rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for retrieval with `take_error`.
pub trait OutputWriter {
    /// Write a batch of peasant snapshots.
    fn write_snapshots(&mut self, rows: &[PeasantSnapshotRow]) -> OutputResult<()>;

    /// Write one economy row.
    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
