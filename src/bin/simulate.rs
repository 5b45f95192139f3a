use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use clap::Parser;

use orbit_trajectory_sim::config::{self, BodyConfig};
use orbit_trajectory_sim::dynamics::{SimulationInputs, simulate};
use orbit_trajectory_sim::export::{summary, trajectory};
use orbit_core::time::{days_to_seconds, months_to_seconds, seconds_to_days};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Two-body trajectory simulator (fixed-step semi-implicit Euler)"
)]
struct Cli {
    /// Scenario manifest (TOML or YAML)
    #[arg(long, default_value = "configs/scenarios/earth_moon.toml")]
    scenario: PathBuf,

    /// Central-body catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "configs/bodies")]
    bodies: PathBuf,

    /// Override the scenario time horizon, in days
    #[arg(long, conflicts_with = "horizon_months")]
    horizon_days: Option<f64>,

    /// Override the scenario time horizon, in 30-day months
    #[arg(long)]
    horizon_months: Option<f64>,

    /// Override the integration step, in seconds
    #[arg(long)]
    time_step: Option<f64>,

    /// Trajectory CSV output path (`-` for stdout)
    #[arg(long, default_value = "artifacts/trajectory.csv")]
    output: PathBuf,

    /// Optional JSON run-summary sidecar
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn find_body(bodies: &[BodyConfig], name: &str) -> anyhow::Result<BodyConfig> {
    bodies
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown central body '{}' in catalog", name))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let bodies = config::load_bodies(&cli.bodies)?;
    let scenario = config::load_scenario(&cli.scenario)?;
    let central = find_body(&bodies, &scenario.central_body)?;

    let time_horizon_s = if let Some(days) = cli.horizon_days {
        days_to_seconds(days)
    } else if let Some(months) = cli.horizon_months {
        months_to_seconds(months)
    } else {
        days_to_seconds(scenario.time_horizon_days)
    };

    let inputs = SimulationInputs {
        central_mass_kg: central.mass_kg,
        initial_separation_m: scenario.initial_separation_m,
        orbiting_mass_kg: scenario.orbiting_mass_kg,
        initial_speed_m_s: scenario.initial_speed_m_s,
        time_horizon_s,
        time_step_s: cli.time_step.unwrap_or(scenario.time_step_s),
        planet_radius_m: central.radius_m,
    };

    let history = simulate(&inputs)?;

    let mut writer = trajectory::writer_for_path(&cli.output)?;
    trajectory::write_header(writer.as_mut())?;
    for sample in &history.samples {
        trajectory::Record {
            time_s: sample.time_s,
            x_m: sample.position_m[0],
            y_m: sample.position_m[1],
            vx_m_s: sample.velocity_m_s[0],
            vy_m_s: sample.velocity_m_s[1],
            ax_m_s2: sample.acceleration_m_s2[0],
            ay_m_s2: sample.acceleration_m_s2[1],
            r_m: sample.radial_distance_m,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(summary_path) = &cli.summary {
        let generated_utc = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let run_summary = summary::RunSummary {
            scenario: &scenario.name,
            central_body: &central.name,
            generated_utc: &generated_utc,
            termination: history.termination.label(),
            sample_count: history.len(),
            time_step_s: inputs.time_step_s,
            time_horizon_s: inputs.time_horizon_s,
            final_time_s: history.last().map(|s| s.time_s),
            final_radial_distance_m: history.last().map(|s| s.radial_distance_m),
        };
        summary::write_summary(summary_path, &run_summary)?;
    }

    println!("Scenario      : {}", scenario.name);
    println!(
        "Central body  : {} ({:.4e} kg, radius {:.4e} m)",
        central.name, central.mass_kg, central.radius_m
    );
    println!("Time step     : {} s", inputs.time_step_s);
    println!(
        "Horizon       : {} s ({:.2} days)",
        inputs.time_horizon_s,
        seconds_to_days(inputs.time_horizon_s)
    );
    println!("Samples       : {}", history.len());
    println!("Termination   : {}", history.termination.label());
    if let Some(last) = history.last() {
        println!(
            "Final state   : t = {} s, r = {:.6e} m",
            last.time_s, last.radial_distance_m
        );
    }
    if cli.output != PathBuf::from("-") {
        println!("Trajectory CSV: {}", cli.output.display());
    }

    Ok(())
}
