//! Grid topology builder.
//!
//! Lays the particle lattice flat in the XY plane, partitions the total
//! mass and damping across it according to boundary position, and pins
//! the rail edge.

use vela_math::Vec3;
use vela_types::Scalar;

use crate::geometry::update_geometry;
use crate::grid::SheetGrid;
use crate::particle::Particle;
use crate::point::SurfacePoint;

/// Builds a sheet of `nx × ny` patches spanning `width × height`,
/// centered at the origin in the z = 0 plane, normals facing +Z.
///
/// Mass and damping model lumped quantities from uniform-density
/// patches: each patch contributes `total/(nx·ny)`, split evenly among
/// the particles that border it. An interior particle is shared by four
/// patches and collects a full patch share; an edge particle borders
/// two patches and collects half; a corner borders one and collects a
/// quarter. Tributary area follows the same rule. The shares sum back
/// to the configured totals exactly.
///
/// Every particle in column 0 is pinned — the sheet hangs from a rail
/// along its left edge. No other boundary layout is supported.
///
/// Runs one geometry pass before returning so centers and normals are
/// valid for the initial flat configuration.
pub fn build_lattice(
    total_mass: Scalar,
    total_damping: Scalar,
    width: Scalar,
    height: Scalar,
    nx: usize,
    ny: usize,
) -> SheetGrid {
    let patch_count = (nx * ny) as Scalar;
    let patch_mass = total_mass / patch_count;
    let patch_damping = total_damping / patch_count;
    let patch_area = (width * height) / patch_count;

    let mut particles = Vec::with_capacity((ny + 1) * (nx + 1));
    for i in 0..=ny {
        let y = height * i as Scalar / ny as Scalar - height / 2.0;
        for j in 0..=nx {
            let x = width * j as Scalar / nx as Scalar - width / 2.0;

            // Boundary share: halved per boundary the particle sits on.
            let mut share: Scalar = 1.0;
            if i == 0 || i == ny {
                share *= 0.5;
            }
            if j == 0 || j == nx {
                share *= 0.5;
            }

            let mut particle = Particle::new(
                patch_mass * share,
                patch_damping * share,
                patch_area * share,
                Vec3::new(x, y, 0.0),
                Vec3::Z,
            );
            particle.pinned = j == 0;
            particles.push(particle);
        }
    }

    // Centers get real positions and normals in the geometry pass below.
    let centers = vec![SurfacePoint::new(Vec3::ZERO, Vec3::Z); ny * nx];

    let mut grid = SheetGrid::from_parts(nx, ny, particles, centers);
    update_geometry(&mut grid);
    grid
}
