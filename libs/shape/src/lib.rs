//! Time-varying concurrency curves for load scenarios.
//!
//! A [`DoubleWave`] maps elapsed run time to the number of concurrent
//! users a host load engine should be running at that instant. The curve
//! is two Gaussian surges over a constant floor, modelling traffic that
//! peaks twice over the life of a test (for example midday and evening).
//! The curve itself is pure arithmetic; scheduling, worker management and
//! request dispatch belong to whatever engine polls it.

mod config;
mod curve;
mod plan;

pub use config::{
    DEFAULT_PEAK_ONE_CENTER, DEFAULT_PEAK_TWO_CENTER, DEFAULT_WIDTH,
    ShapeConfig, ShapeConfigError,
};
pub use curve::{DoubleWave, Tick};
pub use plan::PlanStep;
