use serde::{Deserialize, Serialize};

use crate::config::{ShapeConfig, ShapeConfigError};

/// One scheduling-tick instruction for the host engine.
///
/// `users` and `spawn_rate` always carry the same value: jump straight to
/// the target level instead of ramping towards it in stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub users: u32,
    pub spawn_rate: u32,
}

/// A validated two-peak concurrency curve.
///
/// Each surge is an unnormalized Gaussian bump rising from and returning
/// to the `min_users` floor without discontinuities. Evaluation is a pure
/// function of elapsed time, safe to call repeatedly and out of order.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubleWave {
    config: ShapeConfig,
}

impl DoubleWave {
    /// Validates `config` and wraps it. A zero or negative time limit,
    /// an out-of-range peak center, or a non-positive width is rejected
    /// here so evaluation never divides by zero.
    pub fn new(config: ShapeConfig) -> Result<Self, ShapeConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    pub fn time_limit(&self) -> f64 {
        self.config.time_limit
    }

    /// Returns the target concurrency for `elapsed_secs` seconds into the
    /// run, or `None` once the time limit is reached, which tells the
    /// host engine to stop the scenario and tear down its workers.
    ///
    /// Elapsed time is rounded to the nearest whole second before use, so
    /// sub-second sampling jitter in the host's tick loop does not move
    /// the result.
    pub fn tick(&self, elapsed_secs: f64) -> Option<Tick> {
        let run_time = elapsed_secs.round();
        if run_time >= self.config.time_limit {
            return None;
        }

        let target = self.target_at(run_time);
        Some(Tick {
            users: target,
            spawn_rate: target,
        })
    }

    fn target_at(&self, run_time: f64) -> u32 {
        let config = &self.config;
        let width = config.width * config.time_limit;

        let bump = |center: f64, amplitude: u32| -> f64 {
            let x = (run_time - center * config.time_limit) / width;
            f64::from(amplitude) * (-(x * x)).exp()
        };

        let users = bump(config.peak_one_center, config.peak_one_amplitude)
            + bump(config.peak_two_center, config.peak_two_amplitude)
            + f64::from(config.min_users);

        users.round() as u32
    }
}
