//! The wind force model.
//!
//! For particle `i` with unit normal `n̂`, tributary area `a`, and
//! velocity `v`, a wind velocity `w` contributes
//!
//! ```text
//! F = c_w · a · dot(n̂, w − v) · n̂
//! ```
//!
//! The signed projection makes the force orientation-independent
//! (flipping the normal flips the projection as well), and the
//! relative-velocity term stops the wind from pumping energy into a
//! sheet that already moves with it. Wind blowing parallel to the
//! local surface produces no force.

use vela_grid::SheetGrid;
use vela_math::Vec3;
use vela_types::Scalar;

/// Adds the tick's wind force into every particle's external-force
/// accumulator. Does not reset the accumulators first — the integrator
/// clears them at the end of each tick.
///
/// Pinned particles accumulate like any other; integration ignores
/// their forces.
pub fn apply_wind(grid: &mut SheetGrid, wind: Vec3, drag: Scalar) {
    for p in grid.particles_mut() {
        let relative = wind - p.velocity;
        let projection = p.point.normal.dot(relative);
        p.external_force += p.point.normal * (drag * p.area * projection);
    }
}
