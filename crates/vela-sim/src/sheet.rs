//! The simulation facade.

use std::time::Instant;

use vela_grid::geometry::update_geometry;
use vela_grid::{build_lattice, SheetGrid};
use vela_math::Vec3;
use vela_types::{Scalar, VelaResult};

use crate::config::SheetConfig;
use crate::context::SimulationContext;
use crate::integrator::integrate;
use crate::springs::{accumulate_spring_forces, SpringLayout};
use crate::wind::apply_wind;

/// Result of one simulation tick, for telemetry.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Wall-clock time for the tick (seconds).
    pub wall_time: f64,
    /// Springs skipped by the degeneracy guard.
    pub springs_skipped: u32,
    /// Normals left unnormalized by the degeneracy guard.
    pub normals_skipped: u32,
}

/// A simulated deformable sheet: the particle grid plus its spring
/// layout.
///
/// The grid has exactly one owner for its entire lifetime. Each
/// [`step`](Sheet::step) runs the tick pipeline to completion —
/// spring pass, wind pass, integration, geometry pass — so from the
/// caller's perspective a tick is indivisible.
pub struct Sheet {
    grid: SheetGrid,
    springs: SpringLayout,
    wind_drag: Scalar,
}

impl Sheet {
    /// Builds a sheet from a validated configuration.
    ///
    /// The lattice comes up flat, at exactly the springs' rest-length
    /// spacing, with geometry derived for the initial configuration.
    pub fn new(config: &SheetConfig) -> VelaResult<Self> {
        config.validate()?;
        let grid = build_lattice(
            config.total_mass,
            config.total_damping,
            config.width,
            config.height,
            config.patches_x,
            config.patches_y,
        );
        let springs = SpringLayout::from_patch_size(config.patch_width(), config.patch_height());
        Ok(Self {
            grid,
            springs,
            wind_drag: config.wind_drag,
        })
    }

    /// Advances the simulation by exactly one `ctx.dt`, under the
    /// given wind velocity vector.
    ///
    /// The integrator cleared all force accumulators at the end of the
    /// previous tick (and the builder starts them clear), which is the
    /// precondition the spring pass relies on.
    pub fn step(&mut self, ctx: &SimulationContext, wind: Vec3) -> StepReport {
        let start = Instant::now();

        let springs_skipped = accumulate_spring_forces(&mut self.grid, &self.springs);
        apply_wind(&mut self.grid, wind, self.wind_drag);
        integrate(&mut self.grid, ctx);
        let normals_skipped = update_geometry(&mut self.grid);

        StepReport {
            wall_time: start.elapsed().as_secs_f64(),
            springs_skipped,
            normals_skipped,
        }
    }

    /// The particle grid, for render-buffer extraction and inspection.
    #[inline]
    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }

    /// Mutable grid access, for drivers that perturb or pose the sheet.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut SheetGrid {
        &mut self.grid
    }

    /// The spring layout in effect.
    #[inline]
    pub fn springs(&self) -> &SpringLayout {
        &self.springs
    }

    /// Total kinetic energy, `0.5 · Σ mᵢ‖vᵢ‖²`, in f64 to keep the
    /// accumulation stable across large grids.
    pub fn kinetic_energy(&self) -> f64 {
        self.grid
            .particles()
            .iter()
            .map(|p| 0.5 * p.mass as f64 * p.velocity.length_squared() as f64)
            .sum()
    }
}
