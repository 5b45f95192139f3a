//! Renders trajectory histories as 2D line plots via plotters.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;

use orbit_core::constants::SECONDS_PER_DAY;
use orbit_dynamics::TrajectorySample;

/// Named display modes accepted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// y vs x.
    Positions,
    /// vy vs vx.
    Velocities,
    /// ay vs ax.
    Accelerations,
    /// x and y against elapsed time.
    TimeSeries,
    /// Every panel, with output paths derived from the requested stem.
    All,
}

/// Errors raised while rendering plot artifacts.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("trajectory history is empty; nothing to plot")]
    EmptyHistory,
    #[error("output path contains invalid UTF-8")]
    InvalidPath,
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

const SERIES_COLOR: RGBColor = RGBColor(0, 90, 181);
const SECONDARY_COLOR: RGBColor = RGBColor(210, 100, 20);

/// Render `samples` in the requested mode, returning the paths written.
///
/// Single-panel modes write exactly to `output`; [`PlotMode::All`] derives a
/// sibling file per panel from the output stem (`traj.png` becomes
/// `traj_positions.png`, `traj_velocities.png`, ...).
pub fn render(
    samples: &[TrajectorySample],
    mode: PlotMode,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<Vec<PathBuf>, PlotError> {
    if samples.is_empty() {
        return Err(PlotError::EmptyHistory);
    }
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match mode {
        PlotMode::Positions => {
            draw_phase_panel(samples, Panel::Positions, output, width, height)?;
            Ok(vec![output.to_path_buf()])
        }
        PlotMode::Velocities => {
            draw_phase_panel(samples, Panel::Velocities, output, width, height)?;
            Ok(vec![output.to_path_buf()])
        }
        PlotMode::Accelerations => {
            draw_phase_panel(samples, Panel::Accelerations, output, width, height)?;
            Ok(vec![output.to_path_buf()])
        }
        PlotMode::TimeSeries => {
            draw_time_series(samples, output, width, height)?;
            Ok(vec![output.to_path_buf()])
        }
        PlotMode::All => {
            let mut written = Vec::new();
            for (panel, suffix) in [
                (Panel::Positions, "positions"),
                (Panel::Velocities, "velocities"),
                (Panel::Accelerations, "accelerations"),
            ] {
                let path = derived_path(output, suffix);
                draw_phase_panel(samples, panel, &path, width, height)?;
                written.push(path);
            }
            let path = derived_path(output, "time_series");
            draw_time_series(samples, &path, width, height)?;
            written.push(path);
            Ok(written)
        }
    }
}

#[derive(Clone, Copy)]
enum Panel {
    Positions,
    Velocities,
    Accelerations,
}

impl Panel {
    fn caption(self) -> &'static str {
        match self {
            Panel::Positions => "Position",
            Panel::Velocities => "Velocity",
            Panel::Accelerations => "Acceleration",
        }
    }

    fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            Panel::Positions => ("x (m)", "y (m)"),
            Panel::Velocities => ("vx (m/s)", "vy (m/s)"),
            Panel::Accelerations => ("ax (m/s^2)", "ay (m/s^2)"),
        }
    }

    fn points(self, samples: &[TrajectorySample]) -> Vec<(f64, f64)> {
        samples
            .iter()
            .map(|s| match self {
                Panel::Positions => (s.position_m[0], s.position_m[1]),
                Panel::Velocities => (s.velocity_m_s[0], s.velocity_m_s[1]),
                Panel::Accelerations => (s.acceleration_m_s2[0], s.acceleration_m_s2[1]),
            })
            .collect()
    }
}

fn derived_path(output: &Path, suffix: &str) -> PathBuf {
    let parent = output.parent().unwrap_or_else(|| Path::new("."));
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("trajectory");
    parent.join(format!("{}_{}.png", stem, suffix))
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Min/max of one coordinate with a 5% margin so the line never hugs the frame.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        min.abs().max(1.0) * 0.05
    } else {
        span * 0.05
    };
    (min - pad, max + pad)
}

fn draw_phase_panel(
    samples: &[TrajectorySample],
    panel: Panel,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), PlotError> {
    let points = panel.points(samples);
    let (x_min, x_max) = padded_range(points.iter().map(|p| p.0));
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1));

    let output_str = output.to_str().ok_or(PlotError::InvalidPath)?;
    let root = BitMapBackend::new(output_str, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let (x_desc, y_desc) = panel.axis_labels();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(panel.caption(), caption_font)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(label_font)
        .x_labels(6)
        .y_labels(6)
        .x_label_formatter(&|v| format!("{v:.3e}"))
        .y_label_formatter(&|v| format!("{v:.3e}"))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            points,
            ShapeStyle::from(&SERIES_COLOR).stroke_width(2),
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_time_series(
    samples: &[TrajectorySample],
    output: &Path,
    width: u32,
    height: u32,
) -> Result<(), PlotError> {
    let times: Vec<f64> = samples.iter().map(|s| s.time_s / SECONDS_PER_DAY).collect();
    let xs: Vec<(f64, f64)> = times
        .iter()
        .zip(samples.iter())
        .map(|(&t, s)| (t, s.position_m[0]))
        .collect();
    let ys: Vec<(f64, f64)> = times
        .iter()
        .zip(samples.iter())
        .map(|(&t, s)| (t, s.position_m[1]))
        .collect();

    let (t_min, t_max) = padded_range(times.iter().copied());
    let (p_min, p_max) = padded_range(xs.iter().map(|p| p.1).chain(ys.iter().map(|p| p.1)));

    let output_str = output.to_str().ok_or(PlotError::InvalidPath)?;
    let root = BitMapBackend::new(output_str, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Position vs time", caption_font)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(t_min..t_max, p_min..p_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("time (days)")
        .y_desc("position (m)")
        .label_style(label_font.clone())
        .x_labels(6)
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.3e}"))
        .draw()
        .map_err(render_err)?;

    let x_style = ShapeStyle::from(&SERIES_COLOR).stroke_width(2);
    let y_style = ShapeStyle::from(&SECONDARY_COLOR).stroke_width(2);

    chart
        .draw_series(LineSeries::new(xs, x_style))
        .map_err(render_err)?
        .label("x")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], x_style));
    chart
        .draw_series(LineSeries::new(ys, y_style))
        .map_err(render_err)?
        .label("y")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], y_style));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(label_font)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
