use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use csv::ReaderBuilder;

use orbit_trajectory_sim::dynamics::TrajectorySample;
use orbit_trajectory_sim::plot::{self, PlotMode};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render trajectory plots (positions, velocities, accelerations, time series) from CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/trajectory.png")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = Mode::All)]
    mode: Mode,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Mode {
    Positions,
    Velocities,
    Accelerations,
    TimeSeries,
    All,
}

impl From<Mode> for PlotMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Positions => PlotMode::Positions,
            Mode::Velocities => PlotMode::Velocities,
            Mode::Accelerations => PlotMode::Accelerations,
            Mode::TimeSeries => PlotMode::TimeSeries,
            Mode::All => PlotMode::All,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let samples = read_samples(&cli.input)?;
    if samples.is_empty() {
        return Err(anyhow::anyhow!(
            "No usable samples in the provided trajectory CSV"
        ));
    }

    let written = plot::render(&samples, cli.mode.into(), &cli.output, cli.width, cli.height)?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn read_samples(path: &str) -> anyhow::Result<Vec<TrajectorySample>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let time_idx = column("time_s")?;
    let x_idx = column("x_m")?;
    let y_idx = column("y_m")?;
    let vx_idx = column("vx_m_s")?;
    let vy_idx = column("vy_m_s")?;
    let ax_idx = column("ax_m_s2")?;
    let ay_idx = column("ay_m_s2")?;
    let r_idx = column("r_m")?;

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let field = |idx: usize| -> f64 { r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN) };
        let sample = TrajectorySample {
            time_s: field(time_idx),
            position_m: [field(x_idx), field(y_idx)],
            velocity_m_s: [field(vx_idx), field(vy_idx)],
            acceleration_m_s2: [field(ax_idx), field(ay_idx)],
            radial_distance_m: field(r_idx),
        };
        let finite = sample.time_s.is_finite()
            && sample.position_m.iter().all(|v| v.is_finite())
            && sample.velocity_m_s.iter().all(|v| v.is_finite())
            && sample.acceleration_m_s2.iter().all(|v| v.is_finite())
            && sample.radial_distance_m.is_finite();
        if finite {
            samples.push(sample);
        }
    }
    Ok(samples)
}
