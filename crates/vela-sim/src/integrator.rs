//! Explicit forward-Euler integration.
//!
//! No sub-stepping, no error control: one call advances every
//! non-pinned particle by exactly one `dt`.

use vela_grid::SheetGrid;
use vela_math::Vec3;

use crate::context::SimulationContext;

/// Advances all particles one timestep from their accumulated forces.
///
/// For each non-pinned particle:
///
/// ```text
/// a = g + (F_int + F_ext)/m − (c/m)·v
/// v += a·dt
/// p += v·dt
/// ```
///
/// Pinned particles keep position and velocity untouched.
///
/// For ALL particles, pinned or not, the post-update resets the normal
/// (stale once positions moved; the geometry pass recomputes it) and
/// both force accumulators, leaving the grid ready for the next tick's
/// force passes.
pub fn integrate(grid: &mut SheetGrid, ctx: &SimulationContext) {
    let gravity = ctx.gravity_vec();
    let dt = ctx.dt;

    for p in grid.particles_mut() {
        if !p.pinned {
            let drag = p.velocity * (-p.damping / p.mass);
            let acceleration = gravity + drag + (p.internal_force + p.external_force) / p.mass;
            p.velocity += acceleration * dt;
            p.point.position += p.velocity * dt;
        }
        p.point.normal = Vec3::ZERO;
        p.internal_force = Vec3::ZERO;
        p.external_force = Vec3::ZERO;
    }
}
