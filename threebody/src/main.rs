use threebody::{Scenario, ScenarioConfig, Simulation, PRESETS};

use anyhow::{bail, Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use tracing::{info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulate three bodies under Newtonian gravity")]
struct Args {
    /// Scenario YAML, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "classic.yaml")]
    file_name: String,

    /// Use a built-in scenario instead of a file
    #[arg(long, value_parser = PossibleValuesParser::new(PRESETS))]
    preset: Option<String>,

    /// Override the configured number of steps
    #[arg(long)]
    steps: Option<u64>,

    /// Play the finished trajectory back in a 3D window
    #[arg(long)]
    view: bool,
}

fn load_scenario_from_yaml(file_name: &str) -> Result<Scenario> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(Scenario::build_scenario(scenario_cfg)?)
}

fn main() -> Result<()> {
    // Structured logging, RUST_LOG overrides the default `info`
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();

    let mut scenario = match args.preset.as_deref() {
        Some(name) => Scenario::preset(name).with_context(|| format!("unknown preset {name}"))?,
        None => load_scenario_from_yaml(&args.file_name)?,
    };
    if let Some(steps) = args.steps {
        scenario.parameters.total_steps = steps;
    }

    if args.view && !cfg!(feature = "viewer") {
        bail!("--view needs the `viewer` feature (cargo run --features viewer)");
    }

    let name = scenario.name.clone();
    let mut sim: Simulation = scenario.into_simulation()?;

    let p0 = sim.system().momentum();
    let e0 = sim.energy();
    info!(scenario = %name, steps = sim.total_steps(), dt = sim.dt(), "running");

    sim.run_to_completion();
    report(&sim, p0, e0);

    #[cfg(feature = "viewer")]
    if args.view {
        threebody::run_playback(sim.into_trajectory());
    }

    Ok(())
}

fn report(sim: &Simulation, p0: threebody::NVec3, e0: f64) {
    info!(steps = sim.step_count(), t = sim.time(), "run complete");

    for (i, b) in sim.bodies().iter().enumerate() {
        let x = b.position();
        info!(body = i, x = x.x, y = x.y, z = x.z, "final position");
    }

    let dp = (sim.system().momentum() - p0).norm();
    let e1 = sim.energy();
    let de = if e0 != 0.0 { (e1 - e0) / e0.abs() } else { e1 - e0 };
    info!(momentum_drift = dp, relative_energy_drift = de, "conservation");

    if let Some(bounds) = sim.trajectory().bounds() {
        let c = bounds.center();
        let h = bounds.half_range();
        info!(center = ?[c.x, c.y, c.z], half_range = ?[h.x, h.y, h.z], "trajectory bounds");
    }

    if let Some(d) = sim.degeneracy() {
        warn!(step = d.step, body = d.body, "{d}; consider raising the softening");
    }
}
