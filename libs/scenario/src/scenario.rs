use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use swell_shape::{ShapeConfig, ShapeConfigError};
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::task::{HttpTask, WaitTime};

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("scenario declares no tasks")]
    EmptyTaskTable,
    #[error("task '{name}' has zero weight")]
    ZeroWeight { name: String },
    #[error("task name '{name}' is declared twice")]
    DuplicateTask { name: String },
    #[error("task '{name}' path '{path}' must start with '/'")]
    InvalidPath { name: String, path: String },
    #[error("wait time minimum {min_ms}ms exceeds maximum {max_ms}ms")]
    InvalidWaitTime { min_ms: u64, max_ms: u64 },
    #[error("shape: {0}")]
    Shape(#[from] ShapeConfigError),
}

/// A complete workload description: the weighted task table, the pause
/// bounds between tasks, and the concurrency curve driving the run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Scenario {
    pub name: String,
    pub tasks: Vec<HttpTask>,
    pub wait_time: WaitTime,
    pub shape: ShapeConfig,
}

impl Scenario {
    /// The standard two-peak scenario: seven weighted endpoints spanning
    /// the target server's latency and failure profiles, half-second to
    /// two-second think time, and the 600 second double-wave curve
    /// (floor 500, peaks 2000 and 1000).
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            tasks: vec![
                HttpTask::new("good", "/good", 5),
                HttpTask::new("ok", "/ok", 2),
                HttpTask::new("bad", "/bad", 3),
                HttpTask::new("acceptable", "/acceptable", 4),
                HttpTask::new("veryslow", "/veryslow", 2),
                HttpTask::new("unpredictable", "/err", 3),
                HttpTask::new("not_found", "/notfound", 2),
            ],
            wait_time: WaitTime::from_millis(500, 2000),
            shape: ShapeConfig::builder()
                .min_users(500)
                .peak_one_amplitude(1500)
                .peak_two_amplitude(500)
                .time_limit(600.0)
                .build(),
        }
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.tasks.is_empty() {
            return Err(ScenarioError::EmptyTaskTable);
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.weight == 0 {
                return Err(ScenarioError::ZeroWeight {
                    name: task.name.clone(),
                });
            }
            if !task.path.starts_with('/') {
                return Err(ScenarioError::InvalidPath {
                    name: task.name.clone(),
                    path: task.path.clone(),
                });
            }
            if !seen.insert(task.name.as_str()) {
                return Err(ScenarioError::DuplicateTask {
                    name: task.name.clone(),
                });
            }
        }

        if self.wait_time.min_ms > self.wait_time.max_ms {
            return Err(ScenarioError::InvalidWaitTime {
                min_ms: self.wait_time.min_ms,
                max_ms: self.wait_time.max_ms,
            });
        }

        self.shape.validate()?;
        Ok(())
    }

    /// Sum of all task weights, the denominator of each task's selection
    /// probability.
    pub fn total_weight(&self) -> u64 {
        self.tasks.iter().map(|t| u64::from(t.weight)).sum()
    }
}
