//! riverside — headless run of the three-town demo world.
//!
//! Loads `world.json` (three towns, one gold mine, two dozen trees, eight
//! peasants), gives two idle peasants something to do, runs two simulated
//! minutes at 60 Hz, and writes CSV output to `output/riverside`.
//!
//! Usage: `riverside [WORLD_JSON]`.  Set `RUST_LOG=info` (or `debug`) to
//! follow the peasants.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use hm_core::{AgentId, SimClock, SimConfig, TaskType, Vec3};
use hm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use hm_sim::{AgentRegistry, SimBuilder, SimObserver};
use hm_world::{Economy, GameState};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const STEP_HZ:               u32 = 60;
const SIM_SECONDS:           u64 = 120;
const OUTPUT_INTERVAL_STEPS: u64 = 30; // two snapshots per simulated second
const OUTPUT_DIR:            &str = "output/riverside";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    payouts:       usize,
    last:          Economy,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, payouts: 0, last: Economy::default() }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_step_end(&mut self, clock: &SimClock, economy: Economy) {
        if economy != self.last {
            self.payouts += 1;
            self.last = economy;
        }
        self.inner.on_step_end(clock, economy);
    }

    fn on_snapshot(&mut self, clock: &SimClock, registry: &AgentRegistry, state: &GameState) {
        self.snapshot_rows += registry.len();
        self.inner.on_snapshot(clock, registry, state);
    }

    fn on_sim_end(&mut self, clock: &SimClock) {
        self.inner.on_sim_end(clock);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let world_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("world.json"));

    println!("=== riverside — hamlet town simulation ===");
    println!("World: {}  |  Seconds: {SIM_SECONDS}  |  Seed: {SEED}", world_path.display());
    println!();

    // 1. Load the world description.
    let world = hm_world::load_world_json(&world_path)
        .with_context(|| format!("loading {}", world_path.display()))?;
    println!(
        "World: {} towns, {} mines, {} trees, {} props, {} peasants",
        world.towns.len(),
        world.gold_mines.len(),
        world.trees.len(),
        world.props.len(),
        world.peasants.len(),
    );

    // 2. Sim config.
    let config = SimConfig {
        step_hz:               STEP_HZ,
        total_steps:           SIM_SECONDS * u64::from(STEP_HZ),
        seed:                  SEED,
        output_interval_steps: OUTPUT_INTERVAL_STEPS,
        ..SimConfig::default()
    };

    // 3. Build sim (grid, obstacles, spawns).
    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config, world).build()?;
    println!(
        "Navigation grid: {}x{} cells, {} blocked (built in {:.3} s)",
        sim.navigator.grid().width(),
        sim.navigator.grid().height(),
        sim.navigator.grid().blocked_count(),
        t0.elapsed().as_secs_f64(),
    );

    // 4. Commands: Cedric joins the miners, Edgar walks over to Riverside.
    sim.assign_task(&AgentId::from("peasant_3"), TaskType::MineGold, None)?;
    sim.move_to(&AgentId::from("peasant_5"), Vec3::ground(-30.0, -25.0))?;

    // 5. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    let economy = sim.economy();
    log::info!("final economy: {} gold, {} wood", economy.gold, economy.wood);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  peasant_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  payouts               : {}", obs.payouts);
    println!("  gold: {}  wood: {}", economy.gold, economy.wood);
    println!();

    // 8. Final peasant table.
    println!("{:<10} {:<10} {:<10} {:<17} {:>8} {:>8}", "Peasant", "Name", "Task", "Phase", "x", "z");
    println!("{}", "-".repeat(68));
    for peasant in sim.state.peasants() {
        let pos = sim.position(&peasant.id).unwrap_or(Vec3::ZERO);
        println!(
            "{:<10} {:<10} {:<10} {:<17} {:>8.2} {:>8.2}",
            peasant.id.as_str(),
            peasant.name,
            peasant.task.kind().as_str(),
            peasant.task.phase_name(),
            pos.x,
            pos.z,
        );
    }

    Ok(())
}
