use gravbox::{bench_gravity, bench_step};
use gravbox::{DriverConfig, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file under scenarios/
    #[arg(short, default_value = "demo.yaml")]
    file_name: String,

    /// Run the built-in demo scene instead of loading a file
    #[arg(long)]
    demo: bool,

    /// Run the benchmark suite and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

/// Headless frame loop: step at a fixed frame delta until `t_end`,
/// logging a diagnostic line once per simulated second
fn run(mut sim: Simulation, driver: &DriverConfig) {
    let mut next_report = 1.0;

    while sim.system.t < driver.t_end {
        sim.step(driver.frame_dt, driver.time_scale);

        if sim.system.t >= next_report {
            info!(
                "t = {:7.2} s, bodies = {:3}, energy = {:14.3}",
                sim.system.t,
                sim.system.bodies.len(),
                sim.system.total_energy(&sim.parameters),
            );
            next_report += 1.0;
        }
    }

    println!(
        "finished: t = {:.2} s, {} bodies, total mass {:.1}",
        sim.system.t,
        sim.system.bodies.len(),
        sim.system.total_mass(),
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    if args.demo {
        let mut sim = Simulation::default();
        sim.load_demo_scene();
        run(sim, &DriverConfig::default());
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let sim = Simulation::from_config(&scenario_cfg);
    run(sim, &scenario_cfg.driver);

    Ok(())
}
