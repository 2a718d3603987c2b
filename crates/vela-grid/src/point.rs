//! The plain geometric point shared by particles and patch centers.

use vela_math::Vec3;

/// A point on the deforming surface: position plus smoothed normal.
///
/// Patch centers are bare `SurfacePoint`s — derived geometry with no
/// physical state. [`Particle`](crate::Particle) embeds one and adds
/// the physical fields (composition, not inheritance: the behavioral
/// differences are structural, so no dispatch is needed).
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    /// Position in world space.
    pub position: Vec3,
    /// Surface normal. Unit length after a geometry pass, except for
    /// guarded degenerate accumulations which stay zero.
    pub normal: Vec3,
}

impl SurfacePoint {
    /// Creates a point at `position` with the given normal.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}
