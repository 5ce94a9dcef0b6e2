//! Sea-surface-temperature map renderer.
//!
//! Turns a raw `sst.grid` byte grid into a false-color PNG drawn over a
//! background map. See [`run`] for the pipeline entry point.

pub mod config;
pub mod pipeline;

pub use config::{ConfigError, MapConfig, MapOverrides};
pub use pipeline::{run, RunSummary};
