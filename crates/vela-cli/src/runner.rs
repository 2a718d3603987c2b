//! Headless run loop — frames, ticks, telemetry, and metrics.

use std::time::Instant;

use vela_math::Vec3;
use vela_render::renderer::{RenderFrame, Renderer};
use vela_sim::Sheet;
use vela_telemetry::events::EventKind;
use vela_telemetry::EventBus;
use vela_types::{VelaError, VelaResult};

use crate::scenario::RunConfig;

/// Converts variable frame durations into whole fixed timesteps.
///
/// Leftover time below one `dt` is carried into the next frame instead
/// of dropped, so simulated time tracks frame time without drift.
pub struct FrameClock {
    dt_ms: f64,
    accumulator_ms: f64,
}

impl FrameClock {
    /// Creates a clock for the given timestep (seconds).
    pub fn new(dt: f32) -> Self {
        Self {
            dt_ms: dt as f64 * 1000.0,
            accumulator_ms: 0.0,
        }
    }

    /// Accumulates `elapsed_ms` and returns the number of whole ticks
    /// to run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.accumulator_ms += elapsed_ms;
        let ticks = (self.accumulator_ms / self.dt_ms) as u32;
        self.accumulator_ms -= ticks as f64 * self.dt_ms;
        ticks
    }
}

/// Metrics collected from a headless run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    /// Frames rendered.
    pub frames: u32,
    /// Ticks executed.
    pub ticks: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per tick (milliseconds).
    pub avg_tick_ms: f64,
    /// Final kinetic energy (approaches zero for a settled sheet).
    pub final_kinetic_energy: f64,
    /// Maximum particle displacement from the initial pose (meters).
    pub max_displacement: f32,
    /// Total springs skipped by the degeneracy guard.
    pub springs_skipped: u32,
    /// Total normals skipped by the degeneracy guard.
    pub normals_skipped: u32,
}

impl RunMetrics {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn csv_header() -> &'static str {
        "frames,ticks,total_wall_time_s,avg_tick_ms,final_ke,max_displacement,springs_skipped,normals_skipped"
    }

    /// Formats this run as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.4},{:.6e},{:.6},{},{}",
            self.frames,
            self.ticks,
            self.total_wall_time,
            self.avg_tick_ms,
            self.final_kinetic_energy,
            self.max_displacement,
            self.springs_skipped,
            self.normals_skipped,
        )
    }
}

/// Runs a scenario to completion, submitting one render frame per
/// simulated frame and emitting telemetry on the bus.
pub fn run(
    config: &RunConfig,
    renderer: &mut dyn Renderer,
    bus: &mut EventBus,
) -> VelaResult<RunMetrics> {
    let mut sheet = Sheet::new(&config.sheet)?;
    renderer.init(sheet.grid())?;

    let initial: Vec<Vec3> = sheet
        .grid()
        .particles()
        .iter()
        .map(|p| p.position())
        .collect();

    let mut rng = rand::rng();
    let mut clock = FrameClock::new(config.context.dt);
    let mut tick: u32 = 0;
    let mut tick_wall_time = 0.0_f64;
    let mut springs_skipped = 0_u32;
    let mut normals_skipped = 0_u32;

    let total_start = Instant::now();

    for frame in 0..config.frames {
        for _ in 0..clock.advance(config.frame_ms) {
            let wind = config.wind.sample(&mut rng);

            bus.emit_kind(
                tick,
                EventKind::TickBegin {
                    sim_time: tick as f64 * config.context.dt as f64,
                },
            );
            let report = sheet.step(&config.context, wind);
            bus.emit_kind(
                tick,
                EventKind::TickEnd {
                    wall_time: report.wall_time,
                },
            );
            if report.springs_skipped > 0 || report.normals_skipped > 0 {
                bus.emit_kind(
                    tick,
                    EventKind::DegenerateGeometry {
                        springs_skipped: report.springs_skipped,
                        normals_skipped: report.normals_skipped,
                    },
                );
            }

            tick_wall_time += report.wall_time;
            springs_skipped += report.springs_skipped;
            normals_skipped += report.normals_skipped;
            tick += 1;
        }

        bus.emit_kind(
            tick,
            EventKind::Energy {
                kinetic: sheet.kinetic_energy(),
            },
        );
        renderer.submit_frame(&RenderFrame::capture(frame, sheet.grid()))?;
        bus.flush();
    }

    bus.finish();
    let total_wall_time = total_start.elapsed().as_secs_f64();

    if sheet.grid().has_non_finite() {
        return Err(VelaError::InvariantViolation(
            "non-finite state after run — timestep too large for the spring stiffness?".into(),
        ));
    }

    renderer.finalize()?;

    let max_displacement = sheet
        .grid()
        .particles()
        .iter()
        .zip(&initial)
        .map(|(p, &start)| (p.position() - start).length())
        .fold(0.0_f32, f32::max);

    let avg_tick_ms = if tick > 0 {
        tick_wall_time * 1000.0 / tick as f64
    } else {
        0.0
    };

    Ok(RunMetrics {
        frames: config.frames,
        ticks: tick,
        total_wall_time,
        avg_tick_ms,
        final_kinetic_energy: sheet.kinetic_energy(),
        max_displacement,
        springs_skipped,
        normals_skipped,
    })
}
