//! JSON frame exporter — writes per-frame sheet data for visual
//! inspection.
//!
//! Implements the [`Renderer`] trait. Captures point positions and
//! normals at each frame, then serializes the entire animation (with
//! the static UV and triangle-fan index buffers) to a JSON file on
//! `finalize()`.

use serde::Serialize;
use vela_grid::buffers::{fan_indices, uv_coords};
use vela_grid::SheetGrid;
use vela_types::{Scalar, VelaError, VelaResult};

use crate::renderer::{RenderFrame, Renderer};

/// A single frame of captured sheet data.
#[derive(Serialize)]
struct FrameData {
    frame: u32,
    positions: Vec<Scalar>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    normals: Vec<Scalar>,
}

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    particle_count: usize,
    patch_count: usize,
    indices: Vec<u32>,
    uvs: Vec<Scalar>,
    frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file for visual inspection.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("output.json");
/// exporter.init(sheet.grid())?;
/// // ... run simulation, calling submit_frame() each frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    particle_count: usize,
    patch_count: usize,
    indices: Vec<u32>,
    uvs: Vec<Scalar>,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            particle_count: 0,
            patch_count: 0,
            indices: Vec::new(),
            uvs: Vec::new(),
            frames: Vec::new(),
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, grid: &SheetGrid) -> VelaResult<()> {
        self.particle_count = grid.particle_count();
        self.patch_count = grid.patch_count();
        self.indices = fan_indices(grid);
        self.uvs = uv_coords(grid);
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> VelaResult<()> {
        self.frames.push(FrameData {
            frame: frame.frame,
            positions: frame.positions.clone(),
            normals: frame.normals.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> VelaResult<()> {
        let data = AnimationData {
            particle_count: self.particle_count,
            patch_count: self.patch_count,
            indices: self.indices.clone(),
            uvs: self.uvs.clone(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| VelaError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
