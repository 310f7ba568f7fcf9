//! Goose load test driving the two-peak scenario.
//!
//! Goose owns the command line, so every goose option works as usual:
//!
//!   cargo run --release -p swell-loadgen --bin loadgen -- --host http://localhost:8080
//!
//! Workload selection happens through the environment instead:
//!
//!   SWELL_SCENARIO   scenario JSON file (built-in standard when unset)
//!   SWELL_HOST       default target when --host is not passed
//!   SWELL_PLAN_TICK  curve sampling cadence in seconds (default 1)
//!   SWELL_FLAT       set to 1/true to skip the shaped test plan and
//!                    drive concurrency with goose's own users,
//!                    hatch-rate and run-time options
//!
//! Everything here only declares the workload; goose owns worker pools,
//! weighted selection, request dispatch and metrics.

use std::sync::Arc;

use anyhow::Context;
use goose::prelude::*;
use swell_shape::{DoubleWave, PlanStep};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let workload = load_workload()?;
    let wave = DoubleWave::new(workload.shape.clone())?;

    let mut scenario = scenario!("StandardUser").set_wait_time(
        workload.wait_time.min(),
        workload.wait_time.max(),
    )?;

    for task in &workload.tasks {
        let path = task.path.clone();
        let closure: TransactionFunction = Arc::new(move |user| {
            let path = path.clone();
            Box::pin(async move {
                let _response = user.get(&path).await?;
                Ok(())
            })
        });

        let transaction = Transaction::new(closure)
            .set_name(&task.name)
            .set_weight(task.weight as usize)?;
        scenario = scenario.register_transaction(transaction);
    }

    let host = default_host();
    let mut attack = GooseAttack::initialize()?
        .register_scenario(scenario)
        .set_default(GooseDefault::Host, host.as_str())?;

    if flat_requested() {
        let users = workload.shape.min_users as usize;
        let run_time = wave.time_limit() as usize;
        info!(users, run_time, "flat attack defaults, curve disabled");
        attack = attack
            .set_default(GooseDefault::Users, users)?
            .set_default(GooseDefault::HatchRate, "100")?
            .set_default(GooseDefault::RunTime, run_time)?;
    }
    else {
        let steps = wave.plan(plan_tick());
        let peak = steps.iter().map(|s| s.users).max().unwrap_or(0);
        info!(
            steps = steps.len(),
            peak, "curve sampled into goose test plan"
        );
        attack = attack.set_default(
            GooseDefault::TestPlan,
            test_plan(&steps).as_str(),
        )?;
    }

    attack
        .execute()
        .await
        .context("goose attack failed")?;

    Ok(())
}

fn load_workload() -> anyhow::Result<swell_scenario::Scenario> {
    let workload = match std::env::var("SWELL_SCENARIO") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading scenario file {path}"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing scenario file {path}"))?
        }
        Err(_) => swell_scenario::Scenario::standard(),
    };

    workload.validate().with_context(|| {
        format!("scenario '{}' is invalid", workload.name)
    })?;
    Ok(workload)
}

fn default_host() -> String {
    std::env::var("SWELL_HOST")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}

fn flat_requested() -> bool {
    std::env::var("SWELL_FLAT")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn plan_tick() -> u64 {
    std::env::var("SWELL_PLAN_TICK")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

/// Renders hold steps in goose's test-plan syntax. Each step becomes an
/// instant jump to the target followed by a hold at that level, matching
/// the curve's "both fields equal" tick contract; a final jump to zero
/// tears every worker down the moment the curve stops.
fn test_plan(steps: &[PlanStep]) -> String {
    let mut rendered: Vec<String> = steps
        .iter()
        .map(|step| {
            format!("{0},0s;{0},{1}s", step.users, step.hold_secs)
        })
        .collect();
    rendered.push("0,0s".to_string());
    rendered.join(";")
}
