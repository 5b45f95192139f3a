//! Two-body trajectory simulation core and its front-end helpers.
//!
//! The physics lives in the member crates (`orbit_dynamics` for the
//! integrator, `orbit_core` for constants and vector math); this facade
//! re-exports them alongside configuration, export, and plotting so the
//! binaries and external front-ends share one entry point.

pub use orbit_config as config;
pub use orbit_dynamics as dynamics;
pub use orbit_export as export;

pub mod plot;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
