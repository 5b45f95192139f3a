//! Point-mass gravitational acceleration about a stationary central body.

use orbit_core::constants::G;
use orbit_core::vector::{self, Vector2};

use crate::SimulationError;

/// Radial distance from the central mass at the origin.
///
/// The stepping loop, the acceleration model, and the per-sample recorded
/// radius all share this one norm so the recorded `r` stays consistent with
/// the termination check.
#[inline]
pub fn radial_distance(position: &Vector2) -> f64 {
    vector::norm(position)
}

/// Instantaneous gravitational acceleration of a test body at `position`,
/// with the central mass fixed at the origin.
///
/// Each component is `-G * M * component / r³`, i.e. magnitude `G·M/r²`
/// directed from the position toward the origin. The acceleration of a test
/// mass is independent of its own mass, so only the central mass appears.
///
/// Evaluating at the exact origin is a modeling error, not a transient
/// numerical one: it returns [`SimulationError::DegenerateState`] instead of
/// propagating NaN/∞ into the integrator state.
pub fn gravitational_acceleration(
    central_mass_kg: f64,
    position: &Vector2,
) -> Result<Vector2, SimulationError> {
    let r = radial_distance(position);
    if r == 0.0 {
        return Err(SimulationError::DegenerateState);
    }
    let r_cubed = r * r * r;
    Ok(vector::scale(position, -G * central_mass_kg / r_cubed))
}
