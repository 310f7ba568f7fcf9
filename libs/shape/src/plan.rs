use serde::{Deserialize, Serialize};

use crate::curve::DoubleWave;

/// A stretch of the curve at one target level: hold `users` for
/// `hold_secs` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub users: u32,
    pub hold_secs: u64,
}

impl DoubleWave {
    /// Samples the curve at a fixed cadence and collapses consecutive
    /// equal targets into hold steps, the form step-plan host engines
    /// consume. A zero interval is treated as one second.
    pub fn plan(&self, sample_interval_secs: u64) -> Vec<PlanStep> {
        let interval = sample_interval_secs.max(1);
        let mut steps: Vec<PlanStep> = Vec::new();

        let mut elapsed = 0u64;
        while let Some(tick) = self.tick(elapsed as f64) {
            match steps.last_mut() {
                Some(step) if step.users == tick.users => {
                    step.hold_secs += interval;
                }
                _ => {
                    steps.push(PlanStep {
                        users: tick.users,
                        hold_secs: interval,
                    });
                }
            }
            elapsed += interval;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeConfig;

    fn double_wave() -> DoubleWave {
        DoubleWave::new(
            ShapeConfig::builder()
                .min_users(500)
                .peak_one_amplitude(1500)
                .peak_two_amplitude(500)
                .time_limit(600.0)
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn plan_covers_the_whole_run() {
        let steps = double_wave().plan(1);

        let total: u64 = steps.iter().map(|s| s.hold_secs).sum();
        assert_eq!(total, 600);
    }

    #[test]
    fn plan_rises_to_both_peaks_in_order() {
        let steps = double_wave().plan(1);

        let max = steps.iter().map(|s| s.users).max().unwrap();
        assert_eq!(max, 2000);

        // The floor-level tails at both ends collapse into long holds.
        assert_eq!(steps.first().unwrap().users, 500);
        assert_eq!(steps.last().unwrap().users, 500);
        assert!(steps.first().unwrap().hold_secs > 30);
    }

    #[test]
    fn coarse_sampling_still_ends_at_the_limit() {
        let steps = double_wave().plan(10);

        let total: u64 = steps.iter().map(|s| s.hold_secs).sum();
        assert_eq!(total, 600);
        assert!(steps.len() < 70);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let steps = double_wave().plan(0);

        let total: u64 = steps.iter().map(|s| s.hold_secs).sum();
        assert_eq!(total, 600);
    }
}
