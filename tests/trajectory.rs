use orbit_core::time::days_to_seconds;
use orbit_dynamics::{
    ESCAPE_FACTOR, SimulationError, SimulationInputs, TerminationReason, simulate,
};

/// The stock Earth-mass / Moon-like-orbit parameter set.
fn earth_moon_inputs() -> SimulationInputs {
    SimulationInputs {
        central_mass_kg: 5.972e24,
        initial_separation_m: 3.844e8,
        orbiting_mass_kg: 7.346e22,
        initial_speed_m_s: 1.022e3,
        time_horizon_s: days_to_seconds(30.0),
        time_step_s: 60.0,
        planet_radius_m: 6.4e6,
    }
}

#[test]
fn first_sample_matches_initial_conditions() {
    let history = simulate(&earth_moon_inputs()).expect("simulate");
    let first = history.samples.first().expect("first sample");

    assert_eq!(first.time_s, 0.0);
    assert_eq!(first.position_m, [3.844e8, 0.0]);
    assert_eq!(first.velocity_m_s, [0.0, 1.022e3]);
    assert_eq!(first.radial_distance_m, 3.844e8);
    // Acceleration at the start points along -x, straight at the central mass.
    assert!(first.acceleration_m_s2[0] < 0.0);
    assert_eq!(first.acceleration_m_s2[1], 0.0);
}

#[test]
fn bound_orbit_exhausts_the_full_horizon() {
    let inputs = earth_moon_inputs();
    let history = simulate(&inputs).expect("simulate");

    let expected_len = (inputs.time_horizon_s / inputs.time_step_s).floor() as usize;
    assert_eq!(history.len(), expected_len);
    assert_eq!(history.termination, TerminationReason::HorizonExhausted);
    assert!(history.len() as f64 * inputs.time_step_s >= inputs.time_horizon_s);
}

#[test]
fn elapsed_time_advances_by_exactly_one_step() {
    let history = simulate(&earth_moon_inputs()).expect("simulate");
    for pair in history.samples.windows(2) {
        assert_eq!(pair[1].time_s, pair[0].time_s + 60.0);
    }
}

#[test]
fn recorded_radius_matches_the_position_norm() {
    let history = simulate(&earth_moon_inputs()).expect("simulate");
    for sample in &history.samples {
        let norm = (sample.position_m[0].powi(2) + sample.position_m[1].powi(2)).sqrt();
        let relative_error = (sample.radial_distance_m - norm).abs() / norm;
        assert!(relative_error < 1e-9, "relative error: {relative_error}");
    }
}

#[test]
fn identical_inputs_reproduce_identical_histories() {
    let inputs = earth_moon_inputs();
    let a = simulate(&inputs).expect("first run");
    let b = simulate(&inputs).expect("second run");

    assert_eq!(a.len(), b.len());
    assert_eq!(a.termination, b.termination);
    for (left, right) in a.samples.iter().zip(b.samples.iter()) {
        assert_eq!(left.time_s, right.time_s);
        assert_eq!(left.position_m, right.position_m);
        assert_eq!(left.velocity_m_s, right.velocity_m_s);
        assert_eq!(left.acceleration_m_s2, right.acceleration_m_s2);
        assert_eq!(left.radial_distance_m, right.radial_distance_m);
    }
}

#[test]
fn zero_horizon_yields_an_empty_history() {
    let mut inputs = earth_moon_inputs();
    inputs.time_horizon_s = 0.0;
    let history = simulate(&inputs).expect("simulate");

    assert!(history.is_empty());
    assert_eq!(history.termination, TerminationReason::HorizonExhausted);
}

#[test]
fn dropped_body_terminates_on_collision() {
    let mut inputs = earth_moon_inputs();
    inputs.initial_speed_m_s = 0.0;
    let history = simulate(&inputs).expect("simulate");

    assert_eq!(history.termination, TerminationReason::Collision);
    assert!(!history.is_empty());
    // Every recorded sample passed the continuation check, including the last.
    let last = history.last().expect("last sample");
    assert!(last.radial_distance_m > inputs.planet_radius_m);
    assert!(last.time_s < inputs.time_horizon_s);
}

#[test]
fn hyperbolic_speed_terminates_on_escape() {
    let mut inputs = earth_moon_inputs();
    inputs.initial_speed_m_s = 3.0e3;
    inputs.time_horizon_s = days_to_seconds(365.0);
    let history = simulate(&inputs).expect("simulate");

    assert_eq!(history.termination, TerminationReason::Escape);
    let last = history.last().expect("last sample");
    assert!(last.radial_distance_m < ESCAPE_FACTOR * inputs.initial_separation_m);
    assert!(last.time_s < inputs.time_horizon_s);
}

#[test]
fn negative_central_mass_is_rejected() {
    let mut inputs = earth_moon_inputs();
    inputs.central_mass_kg = -1.0;
    let err = simulate(&inputs).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "central_mass_kg",
            ..
        }
    ));
}

#[test]
fn zero_time_step_is_rejected() {
    let mut inputs = earth_moon_inputs();
    inputs.time_step_s = 0.0;
    let err = simulate(&inputs).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "time_step_s",
            ..
        }
    ));
}

#[test]
fn negative_horizon_is_rejected() {
    let mut inputs = earth_moon_inputs();
    inputs.time_horizon_s = -60.0;
    let err = simulate(&inputs).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "time_horizon_s",
            ..
        }
    ));
}

#[test]
fn non_positive_planet_radius_is_rejected() {
    let mut inputs = earth_moon_inputs();
    inputs.planet_radius_m = 0.0;
    let err = simulate(&inputs).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "planet_radius_m",
            ..
        }
    ));
}

#[test]
fn zero_initial_separation_is_rejected() {
    let mut inputs = earth_moon_inputs();
    inputs.initial_separation_m = 0.0;
    let err = simulate(&inputs).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidParameter {
            name: "initial_separation_m",
            ..
        }
    ));
}
