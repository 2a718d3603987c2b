//! # vela-render
//!
//! The renderer seam of the Vela engine.
//!
//! Rendering is an external collaborator: once per frame it pulls flat
//! arrays of positions and normals from the simulation and presents
//! them. It never feeds back into the simulation. This crate defines
//! that contract ([`Renderer`], [`RenderFrame`]) plus two
//! implementations: a no-op for benchmarks and CI, and a JSON exporter
//! for offline visual inspection.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
