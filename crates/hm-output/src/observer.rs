//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hm_core::SimClock;
use hm_sim::{AgentRegistry, SimObserver};
use hm_world::{Economy, GameState};

use crate::row::{EconomyRow, PeasantSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes peasant snapshots and economy changes to
/// any [`OutputWriter`].
///
/// An economy row is written on the first step and on every step where the
/// totals changed, so each row marks a payout.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    last_economy: Option<Economy>,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_economy: None, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn time_ms(clock: &SimClock) -> u64 {
    clock.now_ms().round() as u64
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, clock: &SimClock, economy: Economy) {
        if self.last_economy == Some(economy) {
            return;
        }
        self.last_economy = Some(economy);
        let row = EconomyRow { time_ms: time_ms(clock), gold: economy.gold, wood: economy.wood };
        let result = self.writer.write_economy(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, clock: &SimClock, registry: &AgentRegistry, state: &GameState) {
        let time_ms = time_ms(clock);
        let rows: Vec<PeasantSnapshotRow> = registry
            .iter()
            .map(|agent| {
                let (task, phase) = state
                    .peasant(&agent.id)
                    .map_or(("idle", "idle"), |p| (p.task.kind().as_str(), p.task.phase_name()));
                PeasantSnapshotRow {
                    peasant_id: agent.id.to_string(),
                    time_ms,
                    x:          agent.body.position.x,
                    z:          agent.body.position.z,
                    heading:    agent.body.heading,
                    task,
                    phase,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
