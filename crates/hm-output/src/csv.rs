//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `peasant_snapshots.csv`
//! - `economy.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EconomyRow, OutputResult, PeasantSnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 7] = ["peasant_id", "time_ms", "x", "z", "heading", "task", "phase"];
pub const ECONOMY_HEADER: [&str; 3] = ["time_ms", "gold", "wood"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    economy:   Writer<File>,
    rows:      u64,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("peasant_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut economy = Writer::from_path(dir.join("economy.csv"))?;
        economy.write_record(ECONOMY_HEADER)?;

        Ok(Self { snapshots, economy, rows: 0, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PeasantSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.peasant_id.clone(),
                row.time_ms.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.z),
                format!("{:.4}", row.heading),
                row.task.to_owned(),
                row.phase.to_owned(),
            ])?;
        }
        self.rows += rows.len() as u64;
        Ok(())
    }

    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()> {
        self.economy.write_record(&[
            row.time_ms.to_string(),
            row.gold.to_string(),
            row.wood.to_string(),
        ])?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.economy.flush()?;
        log::info!("CSV output complete: {} rows", self.rows);
        Ok(())
    }
}
