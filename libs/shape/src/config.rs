use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

/// First surge centers one third of the way through the run.
pub const DEFAULT_PEAK_ONE_CENTER: f64 = 1.0 / 3.0;
/// Second surge centers two thirds of the way through the run.
pub const DEFAULT_PEAK_TWO_CENTER: f64 = 2.0 / 3.0;
/// Shared surge width as a fraction of the run length.
pub const DEFAULT_WIDTH: f64 = 1.0 / 15.0;

#[derive(Debug, Error, PartialEq)]
pub enum ShapeConfigError {
    #[error("time limit must be a positive number of seconds, got {0}")]
    InvalidTimeLimit(f64),
    #[error("peak center must be a fraction inside (0, 1), got {0}")]
    InvalidPeakCenter(f64),
    #[error("peak width must be a positive fraction of the run, got {0}")]
    InvalidWidth(f64),
}

/// Parameters of a two-peak concurrency curve.
///
/// Built once when a scenario starts and immutable afterwards. Peak
/// centers and width are fractions of `time_limit`, so the same shape
/// scales proportionally to any run length.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
    TypedBuilder,
)]
pub struct ShapeConfig {
    /// Baseline concurrency held for the whole run.
    pub min_users: u32,
    /// Users added above the floor at the first peak's center.
    pub peak_one_amplitude: u32,
    /// Users added above the floor at the second peak's center.
    pub peak_two_amplitude: u32,
    /// Total run length in seconds.
    pub time_limit: f64,
    #[builder(default = DEFAULT_PEAK_ONE_CENTER)]
    #[serde(default = "default_peak_one_center")]
    pub peak_one_center: f64,
    #[builder(default = DEFAULT_PEAK_TWO_CENTER)]
    #[serde(default = "default_peak_two_center")]
    pub peak_two_center: f64,
    #[builder(default = DEFAULT_WIDTH)]
    #[serde(default = "default_width")]
    pub width: f64,
}

impl ShapeConfig {
    pub fn validate(&self) -> Result<(), ShapeConfigError> {
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ShapeConfigError::InvalidTimeLimit(self.time_limit));
        }
        for center in [self.peak_one_center, self.peak_two_center] {
            if !center.is_finite() || center <= 0.0 || center >= 1.0 {
                return Err(ShapeConfigError::InvalidPeakCenter(center));
            }
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ShapeConfigError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

fn default_peak_one_center() -> f64 {
    DEFAULT_PEAK_ONE_CENTER
}

fn default_peak_two_center() -> f64 {
    DEFAULT_PEAK_TWO_CENTER
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ShapeConfig {
        ShapeConfig::builder()
            .min_users(500)
            .peak_one_amplitude(1500)
            .peak_two_amplitude(500)
            .time_limit(600.0)
            .build()
    }

    #[test]
    fn builder_fills_default_fractions() {
        let config = config();

        assert_eq!(config.peak_one_center, DEFAULT_PEAK_ONE_CENTER);
        assert_eq!(config.peak_two_center, DEFAULT_PEAK_TWO_CENTER);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_time_limit() {
        let mut config = config();
        config.time_limit = 0.0;

        assert_eq!(
            config.validate(),
            Err(ShapeConfigError::InvalidTimeLimit(0.0))
        );
    }

    #[test]
    fn rejects_non_finite_time_limit() {
        let mut config = config();
        config.time_limit = f64::NAN;

        assert!(matches!(
            config.validate(),
            Err(ShapeConfigError::InvalidTimeLimit(_))
        ));
    }

    #[test]
    fn rejects_center_outside_unit_interval() {
        let mut config = config();
        config.peak_two_center = 1.0;

        assert_eq!(
            config.validate(),
            Err(ShapeConfigError::InvalidPeakCenter(1.0))
        );
    }

    #[test]
    fn rejects_non_positive_width() {
        let mut config = config();
        config.width = -0.1;

        assert_eq!(
            config.validate(),
            Err(ShapeConfigError::InvalidWidth(-0.1))
        );
    }

    #[test]
    fn fraction_fields_default_when_absent_from_json() {
        let config: ShapeConfig = serde_json::from_str(
            r#"{
                "min_users": 500,
                "peak_one_amplitude": 1500,
                "peak_two_amplitude": 500,
                "time_limit": 600.0
            }"#,
        )
        .unwrap();

        assert_eq!(config.peak_one_center, DEFAULT_PEAK_ONE_CENTER);
        assert_eq!(config.width, DEFAULT_WIDTH);
    }
}
