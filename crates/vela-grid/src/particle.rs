//! The physical point-mass entity mutated every simulation step.

use vela_math::Vec3;
use vela_types::Scalar;

use crate::point::SurfacePoint;

/// A point mass in the sheet lattice.
///
/// Embeds a [`SurfacePoint`] for its geometric state and carries the
/// physical fields the integrator works on. Owned exclusively by the
/// [`SheetGrid`](crate::SheetGrid); never shared or resized.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Geometric state (position + normal).
    pub point: SurfacePoint,
    /// Velocity (m/s).
    pub velocity: Vec3,
    /// Lumped mass (kg) — this particle's share of the sheet total.
    pub mass: Scalar,
    /// Damping coefficient (N·s/m) — partitioned like mass.
    pub damping: Scalar,
    /// Tributary surface area (m²) — partitioned like mass. Used by
    /// the wind force model.
    pub area: Scalar,
    /// Pinned particles are excluded from integration; their position
    /// is externally authoritative.
    pub pinned: bool,
    /// Accumulated spring forces for the current tick.
    pub internal_force: Vec3,
    /// Accumulated external (wind) forces for the current tick.
    pub external_force: Vec3,
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(mass: Scalar, damping: Scalar, area: Scalar, position: Vec3, normal: Vec3) -> Self {
        Self {
            point: SurfacePoint::new(position, normal),
            velocity: Vec3::ZERO,
            mass,
            damping,
            area,
            pinned: false,
            internal_force: Vec3::ZERO,
            external_force: Vec3::ZERO,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.point.position
    }

    /// Current normal.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.point.normal
    }
}
