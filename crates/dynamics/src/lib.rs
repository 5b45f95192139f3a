//! Two-body gravitational dynamics: point-mass acceleration model and the
//! fixed-step trajectory integrator.

use thiserror::Error;

pub mod gravity;
pub mod trajectory;

pub use gravity::{gravitational_acceleration, radial_distance};
pub use trajectory::{
    ESCAPE_FACTOR, SimulationInputs, TerminationReason, TrajectoryHistory, TrajectorySample,
    simulate,
};

/// Errors that abort a simulation run. Both kinds are unrecoverable for the
/// current run and return no partial history.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A caller-supplied physical parameter violates its constraint. Detected
    /// before the loop starts; the run never begins with invalid parameters.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// The acceleration model was asked to evaluate at the exact origin,
    /// where the field is singular.
    #[error("orbiting body coincides with the central mass at the origin")]
    DegenerateState,
}
