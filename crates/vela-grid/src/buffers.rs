//! Render-facing buffer extraction.
//!
//! The renderer is an external collaborator: once per frame it pulls
//! flat arrays of positions and normals and uploads them as-is. The
//! layout contract is particles first (row-major), then patch centers
//! (cell order), interleaved `[x0, y0, z0, x1, y1, z1, ...]`.
//!
//! Texture coordinates and the triangle-fan index buffer depend only on
//! the grid resolution, so they are built once at init time and reused.

use vela_types::Scalar;

use crate::grid::SheetGrid;

/// Interleaved positions: particles row-major, then centers in cell order.
pub fn interleaved_positions(grid: &SheetGrid) -> Vec<Scalar> {
    let mut data = Vec::with_capacity(3 * (grid.particle_count() + grid.patch_count()));
    for p in grid.particles() {
        let pos = p.position();
        data.extend_from_slice(&[pos.x, pos.y, pos.z]);
    }
    for c in grid.centers() {
        data.extend_from_slice(&[c.position.x, c.position.y, c.position.z]);
    }
    data
}

/// Interleaved normals, same point order as [`interleaved_positions`].
pub fn interleaved_normals(grid: &SheetGrid) -> Vec<Scalar> {
    let mut data = Vec::with_capacity(3 * (grid.particle_count() + grid.patch_count()));
    for p in grid.particles() {
        let n = p.normal();
        data.extend_from_slice(&[n.x, n.y, n.z]);
    }
    for c in grid.centers() {
        data.extend_from_slice(&[c.normal.x, c.normal.y, c.normal.z]);
    }
    data
}

/// Texture coordinates, `(u, v)` per point, same point order as the
/// position buffer. Particle `(i, j)` maps to `(j/nx, 1 − i/ny)`;
/// centers sit at the half-cell offsets.
pub fn uv_coords(grid: &SheetGrid) -> Vec<Scalar> {
    let nx = grid.patches_x() as Scalar;
    let ny = grid.patches_y() as Scalar;
    let mut data = Vec::with_capacity(2 * (grid.particle_count() + grid.patch_count()));
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            data.push(j as Scalar / nx);
            data.push(1.0 - i as Scalar / ny);
        }
    }
    for i in 0..grid.patches_y() {
        for j in 0..grid.patches_x() {
            data.push((j as Scalar + 0.5) / nx);
            data.push(1.0 - (i as Scalar + 0.5) / ny);
        }
    }
    data
}

/// Triangle indices: 4 triangles fanning around each cell's center,
/// wound to match the geometry pass. Center points are addressed past
/// the particle block, at `particle_count + row·nx + col`.
pub fn fan_indices(grid: &SheetGrid) -> Vec<u32> {
    let nx = grid.patches_x();
    let cols = grid.cols() as u32;
    let particle_count = grid.particle_count() as u32;

    let mut indices = Vec::with_capacity(12 * grid.patch_count());
    for i in 0..grid.patches_y() {
        for j in 0..nx {
            let center = particle_count + (i * nx + j) as u32;
            let p00 = i as u32 * cols + j as u32;
            let p01 = p00 + 1;
            let p10 = p00 + cols;
            let p11 = p10 + 1;

            indices.extend_from_slice(&[center, p00, p01]);
            indices.extend_from_slice(&[center, p01, p11]);
            indices.extend_from_slice(&[center, p11, p10]);
            indices.extend_from_slice(&[center, p10, p00]);
        }
    }
    indices
}
