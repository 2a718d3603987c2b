//! Geometry derivation: patch centers and smoothed normals.
//!
//! Each cell is triangulated as a fan of 4 triangles around its center
//! rather than split into 2. A fixed diagonal split creates a
//! privileged deformation/lighting direction that is clearly visible on
//! a moving sheet; the symmetric fan avoids it.

use vela_math::triangle::{face_normal, normalize_guarded};
use vela_math::Vec3;

use crate::grid::SheetGrid;

/// Recomputes every patch-center position/normal and every particle
/// normal from the current particle positions.
///
/// Per cell bounded by corners `p00 p01 p10 p11` (row-col order):
/// the center is the corner mean, and the four fan triangles
/// `(c,p00,p01) (c,p01,p11) (c,p11,p10) (c,p10,p00)` each accumulate
/// their unnormalized face normal into the center and both non-center
/// vertices. Accumulations are normalized at the end; a zero-length sum
/// is left as the zero vector instead of being divided.
///
/// All normals are zeroed on entry, so the pass is self-contained and
/// may run directly on the initial flat configuration. It must run
/// after every integration pass, before any normal-dependent force
/// (the wind model) reads the grid again.
///
/// Returns the number of degenerate (zero-accumulation) normals that
/// were left unnormalized.
pub fn update_geometry(grid: &mut SheetGrid) -> u32 {
    for p in grid.particles_mut() {
        p.point.normal = Vec3::ZERO;
    }

    let nx = grid.patches_x();
    let ny = grid.patches_y();

    for i in 0..ny {
        for j in 0..nx {
            let p00 = grid.particle(i, j).position();
            let p01 = grid.particle(i, j + 1).position();
            let p10 = grid.particle(i + 1, j).position();
            let p11 = grid.particle(i + 1, j + 1).position();

            let center = (p00 + p01 + p10 + p11) * 0.25;

            let n0 = face_normal(center, p00, p01);
            let n1 = face_normal(center, p01, p11);
            let n2 = face_normal(center, p11, p10);
            let n3 = face_normal(center, p10, p00);

            // Each corner sees the two fan triangles it belongs to.
            grid.particle_mut(i, j).point.normal += n0 + n3;
            grid.particle_mut(i, j + 1).point.normal += n0 + n1;
            grid.particle_mut(i + 1, j + 1).point.normal += n1 + n2;
            grid.particle_mut(i + 1, j).point.normal += n2 + n3;

            let c = grid.center_mut(i, j);
            c.position = center;
            c.normal = n0 + n1 + n2 + n3;
        }
    }

    let mut degenerate = 0_u32;
    for p in grid.particles_mut() {
        match normalize_guarded(p.point.normal) {
            Some(n) => p.point.normal = n,
            None => {
                p.point.normal = Vec3::ZERO;
                degenerate += 1;
            }
        }
    }
    for c in grid.centers_mut() {
        match normalize_guarded(c.normal) {
            Some(n) => c.normal = n,
            None => {
                c.normal = Vec3::ZERO;
                degenerate += 1;
            }
        }
    }
    degenerate
}
