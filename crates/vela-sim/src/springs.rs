//! The spring network: per-family specs and the internal force pass.
//!
//! Springs are undamped individually; damping is applied globally in
//! the integrator. Forces depend on current positions only.

use vela_grid::SheetGrid;
use vela_math::spring::spring_force;
use vela_types::constants::{BEND_STIFFNESS, SHEAR_STIFFNESS, STRETCH_STIFFNESS};
use vela_types::Scalar;

/// Stiffness and rest length of one spring family.
#[derive(Debug, Clone, Copy)]
pub struct SpringSpec {
    /// Hookean stiffness (N/m).
    pub stiffness: Scalar,
    /// Undeformed length (meters).
    pub rest_length: Scalar,
}

/// The spring families of the sheet.
#[derive(Debug, Clone)]
pub struct SpringLayout {
    /// Horizontal neighbor pairs, one per cell edge along x.
    pub x_stretch: SpringSpec,
    /// Vertical neighbor pairs, one per cell edge along y.
    pub y_stretch: SpringSpec,
    /// Both diagonals of each cell share this spec.
    pub shear: SpringSpec,
    /// Pairs two apart along x. Declared configuration only: no force
    /// law is computed for bend springs.
    pub x_bend: SpringSpec,
    /// Pairs two apart along y. Declared configuration only, like
    /// `x_bend`.
    pub y_bend: SpringSpec,
}

impl SpringLayout {
    /// Derives the layout from the undeformed patch dimensions.
    pub fn from_patch_size(patch_width: Scalar, patch_height: Scalar) -> Self {
        let diagonal = (patch_width * patch_width + patch_height * patch_height).sqrt();
        Self {
            x_stretch: SpringSpec {
                stiffness: STRETCH_STIFFNESS,
                rest_length: patch_width,
            },
            y_stretch: SpringSpec {
                stiffness: STRETCH_STIFFNESS,
                rest_length: patch_height,
            },
            shear: SpringSpec {
                stiffness: SHEAR_STIFFNESS,
                rest_length: diagonal,
            },
            x_bend: SpringSpec {
                stiffness: BEND_STIFFNESS,
                rest_length: 2.0 * patch_width,
            },
            y_bend: SpringSpec {
                stiffness: BEND_STIFFNESS,
                rest_length: 2.0 * patch_height,
            },
        }
    }
}

/// One spring-network pass over the whole grid.
///
/// Adds each spring's force into the two endpoint accumulators,
/// equal-and-opposite, so the pass sums to zero net force. The caller
/// must ensure the internal-force accumulators are zero beforehand —
/// this pass only adds, never resets.
///
/// Returns the number of springs skipped by the degeneracy guard
/// (coincident endpoints).
pub fn accumulate_spring_forces(grid: &mut SheetGrid, layout: &SpringLayout) -> u32 {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut skipped = 0_u32;

    // Stretch springs along x.
    for i in 0..rows {
        for j in 0..cols - 1 {
            skipped += apply_pair(grid, (i, j), (i, j + 1), layout.x_stretch);
        }
    }

    // Stretch springs along y.
    for i in 0..rows - 1 {
        for j in 0..cols {
            skipped += apply_pair(grid, (i, j), (i + 1, j), layout.y_stretch);
        }
    }

    // Shear springs: both diagonals of every cell.
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            skipped += apply_pair(grid, (i, j), (i + 1, j + 1), layout.shear);
            skipped += apply_pair(grid, (i, j + 1), (i + 1, j), layout.shear);
        }
    }

    skipped
}

/// Applies one spring between particles `a` and `b`. Returns 1 if the
/// degeneracy guard skipped it.
fn apply_pair(
    grid: &mut SheetGrid,
    a: (usize, usize),
    b: (usize, usize),
    spec: SpringSpec,
) -> u32 {
    let pa = grid.particle(a.0, a.1).position();
    let pb = grid.particle(b.0, b.1).position();
    match spring_force(pa, pb, spec.stiffness, spec.rest_length) {
        Some(force) => {
            grid.particle_mut(a.0, a.1).internal_force += force;
            grid.particle_mut(b.0, b.1).internal_force -= force;
            0
        }
        None => 1,
    }
}
