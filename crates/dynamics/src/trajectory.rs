//! Fixed-step trajectory integration for a small body orbiting a stationary
//! central mass.
//!
//! The integrator applies a semi-implicit Euler update each step: velocity
//! advances from the acceleration evaluated at the step start, position then
//! advances from the freshly updated velocity. That ordering is part of the
//! scheme, not an implementation detail; reordering it changes the long-run
//! energy drift and therefore the output.

use serde::Serialize;

use orbit_core::vector::{self, Vector2};

use crate::SimulationError;
use crate::gravity::{gravitational_acceleration, radial_distance};

/// Escape boundary as a multiple of the initial separation. A body drifting
/// past this radius is treated as unbound and the run stops.
pub const ESCAPE_FACTOR: f64 = 20.0;

/// Immutable physical parameters for one simulation run, in SI units.
#[derive(Debug, Clone)]
pub struct SimulationInputs {
    /// Mass generating the gravitational field, fixed at the origin (kg).
    pub central_mass_kg: f64,
    /// Initial distance of the orbiting body along the x-axis (m).
    pub initial_separation_m: f64,
    /// Mass of the orbiting body (kg). The point-mass acceleration does not
    /// depend on it; kept as a named input for interface completeness.
    pub orbiting_mass_kg: f64,
    /// Initial speed, applied entirely in the +y direction (m/s).
    pub initial_speed_m_s: f64,
    /// Maximum simulated time (s).
    pub time_horizon_s: f64,
    /// Fixed integration step (s).
    pub time_step_s: f64,
    /// Minimum allowed separation before the run counts as a collision (m).
    pub planet_radius_m: f64,
}

impl SimulationInputs {
    /// Check every parameter constraint eagerly, before any iteration runs.
    /// Invalid inputs are rejected outright; nothing is clamped or defaulted.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let checks: [(&'static str, f64, bool); 6] = [
            ("central_mass_kg", self.central_mass_kg, self.central_mass_kg > 0.0),
            (
                "initial_separation_m",
                self.initial_separation_m,
                self.initial_separation_m > 0.0,
            ),
            ("orbiting_mass_kg", self.orbiting_mass_kg, self.orbiting_mass_kg > 0.0),
            ("time_horizon_s", self.time_horizon_s, self.time_horizon_s >= 0.0),
            ("time_step_s", self.time_step_s, self.time_step_s > 0.0),
            ("planet_radius_m", self.planet_radius_m, self.planet_radius_m > 0.0),
        ];
        for (name, value, ok) in checks {
            if !ok {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// State recorded for one accepted integration step.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub position_m: Vector2,
    pub velocity_m_s: Vector2,
    pub acceleration_m_s2: Vector2,
    pub radial_distance_m: f64,
}

/// Which continuation bound ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The simulated time reached the requested horizon.
    HorizonExhausted,
    /// The body crossed the planet radius.
    Collision,
    /// The body crossed the far boundary and is treated as unbound.
    Escape,
}

impl TerminationReason {
    /// Stable lowercase label used in reports and exported artifacts.
    pub fn label(&self) -> &'static str {
        match self {
            TerminationReason::HorizonExhausted => "horizon_exhausted",
            TerminationReason::Collision => "collision",
            TerminationReason::Escape => "escape",
        }
    }
}

/// Complete ordered record of one run. Samples are appended chronologically
/// during the loop and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryHistory {
    pub samples: Vec<TrajectorySample>,
    pub termination: TerminationReason,
}

impl TrajectoryHistory {
    /// Number of accepted iterations.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Last recorded sample, if any step was accepted.
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }
}

/// Drive the simulation from initial conditions to termination.
///
/// The body starts at `(initial_separation_m, 0)` with velocity
/// `(0, initial_speed_m_s)`. Each iteration checks the continuation bounds,
/// records a sample, then advances state one step. The loop stops only by
/// exhausting the time horizon, crossing the planet radius, or crossing the
/// escape boundary; no iteration cap is imposed beyond those three bounds.
///
/// Runs are deterministic: identical inputs reproduce identical histories.
pub fn simulate(inputs: &SimulationInputs) -> Result<TrajectoryHistory, SimulationError> {
    inputs.validate()?;

    let dt = inputs.time_step_s;
    let escape_radius_m = ESCAPE_FACTOR * inputs.initial_separation_m;

    let mut position: Vector2 = [inputs.initial_separation_m, 0.0];
    let mut velocity: Vector2 = [0.0, inputs.initial_speed_m_s];
    let mut acceleration = gravitational_acceleration(inputs.central_mass_kg, &position)?;
    let mut time_s = 0.0;

    let mut samples = Vec::new();
    let termination = loop {
        let r = radial_distance(&position);
        if time_s >= inputs.time_horizon_s {
            break TerminationReason::HorizonExhausted;
        }
        if r <= inputs.planet_radius_m {
            break TerminationReason::Collision;
        }
        if r >= escape_radius_m {
            break TerminationReason::Escape;
        }

        samples.push(TrajectorySample {
            time_s,
            position_m: position,
            velocity_m_s: velocity,
            acceleration_m_s2: acceleration,
            radial_distance_m: r,
        });

        time_s += dt;
        // Semi-implicit Euler: velocity from the step-start acceleration,
        // position from the updated velocity.
        velocity = vector::add(&velocity, &vector::scale(&acceleration, dt));
        position = vector::add(&position, &vector::scale(&velocity, dt));
        acceleration = gravitational_acceleration(inputs.central_mass_kg, &position)?;
    };

    Ok(TrajectoryHistory {
        samples,
        termination,
    })
}
