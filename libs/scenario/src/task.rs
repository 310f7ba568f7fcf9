use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// One named HTTP action with its relative selection weight.
///
/// A weight of 5 next to a weight of 2 means the host engine picks the
/// first task five times for every two of the second; the absolute
/// numbers carry no other meaning.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
)]
pub struct HttpTask {
    pub name: String,
    pub path: String,
    pub weight: u32,
}

impl HttpTask {
    pub fn new(name: &str, path: &str, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            weight,
        }
    }
}

/// Pause bounds between tasks for one simulated user. The host engine
/// sleeps a uniformly random duration inside the bounds after each task.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
)]
pub struct WaitTime {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl WaitTime {
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_time_converts_to_durations() {
        let wait = WaitTime::from_millis(500, 2000);

        assert_eq!(wait.min(), Duration::from_millis(500));
        assert_eq!(wait.max(), Duration::from_secs(2));
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = HttpTask::new("good", "/good", 5);

        let json = serde_json::to_string(&task).unwrap();
        let back: HttpTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
