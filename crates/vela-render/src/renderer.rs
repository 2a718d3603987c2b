//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per frame to present the current sheet
//! state. The headless renderer discards all frames, serving as a
//! no-op for benchmarks and CI.

use vela_grid::buffers::{interleaved_normals, interleaved_positions};
use vela_grid::SheetGrid;
use vela_types::{Scalar, VelaResult};

/// A single render frame: the per-frame data the simulation hands to
/// the presentation side.
///
/// Positions and normals are interleaved `[x, y, z, ...]`, particles
/// first (row-major) then patch centers (cell order) — the stable
/// layout the static UV and index buffers were built against.
pub struct RenderFrame {
    /// Frame index.
    pub frame: u32,
    /// Interleaved point positions.
    pub positions: Vec<Scalar>,
    /// Interleaved point normals.
    pub normals: Vec<Scalar>,
}

impl RenderFrame {
    /// Captures a frame from the current grid state.
    pub fn capture(frame: u32, grid: &SheetGrid) -> Self {
        Self {
            frame,
            positions: interleaved_positions(grid),
            normals: interleaved_normals(grid),
        }
    }
}

/// Trait for presenting simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — captures frames
///   to a JSON animation file
pub trait Renderer: Send {
    /// Initialize with the grid's static topology (counts, indices, UVs).
    fn init(&mut self, grid: &SheetGrid) -> VelaResult<()>;

    /// Submit a frame for presentation.
    fn submit_frame(&mut self, frame: &RenderFrame) -> VelaResult<()>;

    /// Finalize (flush buffers, close files, etc.).
    fn finalize(&mut self) -> VelaResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _grid: &SheetGrid) -> VelaResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> VelaResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> VelaResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
