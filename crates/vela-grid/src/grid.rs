//! The rectangular particle lattice with explicit row-major indexing.
//!
//! Nested row/column arrays are flattened into single buffers with
//! stored bounds, keeping iteration cache-friendly and the `(row, col)`
//! mapping explicit.

use crate::particle::Particle;
use crate::point::SurfacePoint;

/// The sheet lattice: `(ny+1) × (nx+1)` particles plus `ny × nx`
/// derived patch centers.
///
/// Created once by [`build_lattice`](crate::lattice::build_lattice)
/// and never resized. Particles are stored row-major (`row * cols + col`);
/// centers are stored in cell order (`row * nx + col`).
#[derive(Debug, Clone)]
pub struct SheetGrid {
    /// Patches along x (columns of cells).
    nx: usize,
    /// Patches along y (rows of cells).
    ny: usize,
    /// Particles, row-major.
    particles: Vec<Particle>,
    /// Patch centers, cell order. Fully recomputed every geometry pass.
    centers: Vec<SurfacePoint>,
}

impl SheetGrid {
    /// Assembles a grid from prebuilt buffers. Callers are expected to
    /// pass buffers sized `(ny+1)·(nx+1)` and `ny·nx`.
    pub(crate) fn from_parts(
        nx: usize,
        ny: usize,
        particles: Vec<Particle>,
        centers: Vec<SurfacePoint>,
    ) -> Self {
        debug_assert_eq!(particles.len(), (nx + 1) * (ny + 1));
        debug_assert_eq!(centers.len(), nx * ny);
        Self {
            nx,
            ny,
            particles,
            centers,
        }
    }

    /// Patches along x.
    #[inline]
    pub fn patches_x(&self) -> usize {
        self.nx
    }

    /// Patches along y.
    #[inline]
    pub fn patches_y(&self) -> usize {
        self.ny
    }

    /// Particle rows (`ny + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.ny + 1
    }

    /// Particle columns (`nx + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.nx + 1
    }

    /// Total number of particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Total number of patches (= patch centers).
    #[inline]
    pub fn patch_count(&self) -> usize {
        self.centers.len()
    }

    /// Flat index of particle `(row, col)`.
    #[inline]
    pub fn particle_index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Flat index of the center of cell `(row, col)`.
    #[inline]
    pub fn center_index(&self, row: usize, col: usize) -> usize {
        row * self.nx + col
    }

    /// Particle at `(row, col)`.
    #[inline]
    pub fn particle(&self, row: usize, col: usize) -> &Particle {
        &self.particles[row * (self.nx + 1) + col]
    }

    /// Mutable particle at `(row, col)`.
    #[inline]
    pub fn particle_mut(&mut self, row: usize, col: usize) -> &mut Particle {
        &mut self.particles[row * (self.nx + 1) + col]
    }

    /// Center of cell `(row, col)`.
    #[inline]
    pub fn center(&self, row: usize, col: usize) -> &SurfacePoint {
        &self.centers[row * self.nx + col]
    }

    /// Mutable center of cell `(row, col)`.
    #[inline]
    pub fn center_mut(&mut self, row: usize, col: usize) -> &mut SurfacePoint {
        &mut self.centers[row * self.nx + col]
    }

    /// All particles, row-major.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All particles, mutable.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// All patch centers, cell order.
    #[inline]
    pub fn centers(&self) -> &[SurfacePoint] {
        &self.centers
    }

    /// All patch centers, mutable.
    #[inline]
    pub fn centers_mut(&mut self) -> &mut [SurfacePoint] {
        &mut self.centers
    }

    /// True if any particle position, velocity, or normal — or any
    /// center — carries a non-finite component. Once NaN enters the
    /// state there is no recovery path, so drivers check this after
    /// stepping rather than trusting the output.
    pub fn has_non_finite(&self) -> bool {
        let bad_particle = self.particles.iter().any(|p| {
            !p.point.position.is_finite()
                || !p.point.normal.is_finite()
                || !p.velocity.is_finite()
        });
        bad_particle
            || self
                .centers
                .iter()
                .any(|c| !c.position.is_finite() || !c.normal.is_finite())
    }
}
