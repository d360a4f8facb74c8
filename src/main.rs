use cyclosim::{ScenarioConfig, Scenario};
use cyclosim::bench_rk4_convergence;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Charged particle in a uniform magnetic field, headless RK4 run")]
struct Args {
    /// Scenario file name under `scenarios/`
    #[arg(short, default_value = "cyclotron.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<usize>,

    /// Run the RK4 convergence benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_rk4_convergence();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if let Some(frames) = args.frames {
        scenario.frames = frames;
    }

    info!(file = %args.file_name, frames = scenario.frames, "running scenario");
    let report = scenario.run_headless()?;

    println!(
        "steps = {}, position = ({:.6}, {:.6}), velocity = ({:.6}, {:.6}), speed drift = {:.3e}, trajectory points = {}",
        report.steps,
        report.position.x,
        report.position.y,
        report.velocity.x,
        report.velocity.y,
        report.speed_drift,
        report.trajectory_len
    );

    Ok(())
}
