//! Declarative load-test scenarios.
//!
//! A [`Scenario`] names WHAT to request: a weighted table of HTTP tasks,
//! the pause bounds between tasks for one simulated user, and the
//! concurrency curve driving the run. Weighted-random selection, request
//! dispatch, connection pooling and retry policy all stay with the host
//! load engine; this crate only describes the workload.

mod scenario;
mod task;

pub use scenario::{Scenario, ScenarioError};
pub use task::{HttpTask, WaitTime};
