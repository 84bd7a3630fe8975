//! Tessera Core - Foundation types for the Tessera engine
//!
//! This crate provides what every other Tessera crate builds on:
//! - Frame clock with a fixed-timestep accumulator
//! - TOML-backed engine configuration

pub mod config;
pub mod time;

pub use config::{ConfigError, EngineConfig, LogConfig, RunConfig};
pub use time::{GameTime, TimeConfig};
