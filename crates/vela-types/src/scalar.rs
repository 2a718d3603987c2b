//! Scalar type alias for the simulation.
//!
//! Using `f32` to match the precision the render side consumes
//! (vertex buffers are f32). This alias makes it easy to experiment
//! with `f64` precision if needed.

/// The floating-point type used throughout the simulation.
///
/// Set to `f32` to match render-side vertex data. Change to `f64` for
/// double-precision CPU-only mode (useful for validation).
pub type Scalar = f32;
