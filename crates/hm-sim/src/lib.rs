//! `hm-sim` — tick loop orchestrator for the `hamlet` town simulation.
//!
//! # Tick loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Clock     — advance GameState's clock by one fixed step (1/60 s).
//!   ② Agents    — in spawn order, for each registered agent:
//!                   task ≠ idle → ensure matching TaskMachine, update it
//!                   task = idle → drop any machine, advance manual move
//!   ③ Observe   — on_step_end; on_snapshot every output_interval_steps.
//! ```
//!
//! A host with a variable frame rate feeds frame times to
//! [`Sim::frame`] through a [`FixedStep`] accumulator instead of calling
//! [`Sim::run`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hm_core::SimConfig;
//! use hm_sim::{NoopObserver, SimBuilder};
//!
//! let world = hm_world::load_world_json("world.json")?;
//! let mut sim = SimBuilder::new(SimConfig::default(), world).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("gold: {}", sim.economy().gold);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod registry;
pub mod sim;
pub mod stepper;


pub use builder::{SimBuilder, DEFAULT_SPAWN_JITTER};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use registry::{AgentRegistry, AgentRuntime};
pub use sim::Sim;
pub use stepper::FixedStep;
