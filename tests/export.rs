use std::fs;

use orbit_core::time::days_to_seconds;
use orbit_dynamics::{SimulationInputs, simulate};
use orbit_export::{summary, trajectory};

fn short_run_inputs() -> SimulationInputs {
    SimulationInputs {
        central_mass_kg: 5.972e24,
        initial_separation_m: 3.844e8,
        orbiting_mass_kg: 7.346e22,
        initial_speed_m_s: 1.022e3,
        time_horizon_s: 600.0,
        time_step_s: 60.0,
        planet_radius_m: 6.4e6,
    }
}

#[test]
fn trajectory_csv_round_trips_through_the_writer() {
    let history = simulate(&short_run_inputs()).expect("simulate");
    assert_eq!(history.len(), 10);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("artifacts").join("run.csv");

    let mut writer = trajectory::writer_for_path(&path).expect("writer");
    trajectory::write_header(writer.as_mut()).expect("header");
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
        .write_to(writer.as_mut())
        .expect("record");
    }
    writer.flush().expect("flush");
    drop(writer);

    let contents = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), history.len() + 1);
    assert_eq!(lines[0], trajectory::HEADER);
    assert!(lines[1].starts_with("0,384400000,0,"));
}

#[test]
fn run_summary_sidecar_is_written_as_json() {
    let inputs = short_run_inputs();
    let history = simulate(&inputs).expect("simulate");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("artifacts").join("run_summary.json");
    let last = history.last().expect("last sample");

    let run_summary = summary::RunSummary {
        scenario: "earth_moon",
        central_body: "EARTH",
        generated_utc: "2026-01-01T00:00:00Z",
        termination: history.termination.label(),
        sample_count: history.len(),
        time_step_s: inputs.time_step_s,
        time_horizon_s: inputs.time_horizon_s,
        final_time_s: Some(last.time_s),
        final_radial_distance_m: Some(last.radial_distance_m),
    };
    summary::write_summary(&path, &run_summary).expect("summary");

    let contents = fs::read_to_string(&path).expect("read summary");
    assert!(contents.contains("\"scenario\": \"earth_moon\""));
    assert!(contents.contains("\"termination\": \"horizon_exhausted\""));
    assert!(contents.contains("\"sample_count\": 10"));
}
