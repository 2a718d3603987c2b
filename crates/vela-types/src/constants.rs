//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.81;

/// Default integration timestep (seconds).
pub const DEFAULT_DT: Scalar = 1.0e-3;

/// Stretch spring stiffness (N/m), per grid axis.
pub const STRETCH_STIFFNESS: Scalar = 50.0;

/// Shear spring stiffness (N/m), shared by both cell diagonals.
pub const SHEAR_STIFFNESS: Scalar = 10.0;

/// Bend spring stiffness (N/m). Declared for the two-apart spring
/// family; no force law is computed for it.
pub const BEND_STIFFNESS: Scalar = 50.0;

/// Default wind drag coefficient (dimensionless).
pub const DEFAULT_WIND_DRAG: Scalar = 1.0;

/// Epsilon for floating-point comparisons in tests.
pub const EPSILON: Scalar = 1.0e-5;

/// Length threshold below which a spring or normal accumulation is
/// treated as degenerate and skipped. Guards the divisions that would
/// otherwise inject NaN into the particle state.
pub const DEGENERATE_LENGTH_THRESHOLD: Scalar = 1.0e-10;
