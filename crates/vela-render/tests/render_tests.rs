//! Integration tests for vela-render.

use vela_grid::build_lattice;
use vela_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use vela_render::JsonFrameExporter;

#[test]
fn headless_init() {
    let grid = build_lattice(0.2, 1.0, 0.8, 0.6, 2, 2);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&grid).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
}

#[test]
fn headless_submit_frames() {
    let grid = build_lattice(0.2, 1.0, 0.8, 0.6, 2, 2);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&grid).unwrap();

    let frame = RenderFrame::capture(0, &grid);
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    assert_eq!(renderer.frame_count(), 2);
}

#[test]
fn headless_finalize() {
    let mut renderer = HeadlessRenderer::new();
    renderer.finalize().unwrap();
}

#[test]
fn frame_capture_layout() {
    let grid = build_lattice(0.2, 1.0, 0.8, 0.6, 2, 2);
    let frame = RenderFrame::capture(42, &grid);
    assert_eq!(frame.frame, 42);
    let points = grid.particle_count() + grid.patch_count();
    assert_eq!(frame.positions.len(), 3 * points);
    assert_eq!(frame.normals.len(), 3 * points);
    // Flat sheet: every normal is (0, 0, 1).
    for n in frame.normals.chunks_exact(3) {
        assert!((n[2] - 1.0).abs() < 1e-5);
    }
}

#[test]
fn json_exporter_collects_frames() {
    let grid = build_lattice(0.2, 1.0, 0.8, 0.6, 2, 2);
    let mut exporter = JsonFrameExporter::new("/tmp/vela_export_test.json");
    exporter.init(&grid).unwrap();

    exporter.submit_frame(&RenderFrame::capture(0, &grid)).unwrap();
    exporter.submit_frame(&RenderFrame::capture(1, &grid)).unwrap();
    assert_eq!(exporter.frame_count(), 2);
    assert_eq!(exporter.name(), "json_exporter");

    exporter.finalize().unwrap();
    let written = std::fs::read_to_string("/tmp/vela_export_test.json").unwrap();
    assert!(written.contains("\"particle_count\":9"));
    assert!(written.contains("\"indices\""));
    assert!(written.contains("\"uvs\""));
}
