//! Prints the tick schedule a host scheduler would see, without
//! generating any load. Useful for eyeballing a curve before a run or
//! for feeding a non-goose engine that consumes a stepped plan.

use std::{fs, path::PathBuf};

use anyhow::Context;
use chrono::{Duration, Local};
use clap::Parser;
use swell_scenario::Scenario;
use swell_shape::DoubleWave;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "loadplan")]
#[command(about = "Print a load scenario's tick schedule")]
struct Cli {
    /// Scenario JSON file; the built-in standard scenario when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Curve sampling cadence in seconds
    #[arg(long, default_value_t = 1)]
    tick: u64,

    /// Emit the schedule as JSON
    #[arg(long)]
    json: bool,

    /// Evaluate a single instant instead of the whole schedule
    #[arg(long)]
    at: Option<f64>,
}

impl Cli {
    fn load_scenario(&self) -> anyhow::Result<Scenario> {
        let scenario = match &self.scenario {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| {
                    format!("reading scenario file {}", path.display())
                })?;
                serde_json::from_str(&raw).with_context(|| {
                    format!("parsing scenario file {}", path.display())
                })?
            }
            None => Scenario::standard(),
        };

        scenario.validate().with_context(|| {
            format!("scenario '{}' is invalid", scenario.name)
        })?;
        Ok(scenario)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let workload = cli.load_scenario()?;
    let wave = DoubleWave::new(workload.shape.clone())?;

    if let Some(elapsed) = cli.at {
        match wave.tick(elapsed) {
            Some(command) if cli.json => {
                println!("{}", serde_json::to_string(&command)?)
            }
            Some(command) => println!(
                "users={} spawn_rate={}",
                command.users, command.spawn_rate
            ),
            None if cli.json => println!("null"),
            None => println!("stop"),
        }
        return Ok(());
    }

    let steps = wave.plan(cli.tick);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let shape = &workload.shape;
    let start = Local::now();
    println!(
        "Scenario  | {} | {} tasks | total weight {}",
        workload.name,
        workload.tasks.len(),
        workload.total_weight()
    );
    println!(
        "Curve     | floor {} | peaks {}/{} | {}s",
        shape.min_users,
        shape.min_users + shape.peak_one_amplitude,
        shape.min_users + shape.peak_two_amplitude,
        shape.time_limit
    );
    println!("Start     | {}", start.format("%Y-%m-%dT%H:%M:%S"));

    let mut offset = 0u64;
    for step in &steps {
        let until =
            start + Duration::seconds((offset + step.hold_secs) as i64);
        println!(
            "  +{:>5}s  {:>6} users  (hold {:>4}s, until {})",
            offset,
            step.users,
            step.hold_secs,
            until.format("%H:%M:%S")
        );
        offset += step.hold_secs;
    }
    println!("  +{offset:>5}s  stop");

    Ok(())
}
