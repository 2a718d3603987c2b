//! Run scenarios — sheet config, context, frame schedule, and wind.

use rand::Rng;
use serde::{Deserialize, Serialize};
use vela_math::Vec3;
use vela_sim::{SheetConfig, SimulationContext};

/// Wind supplied to the simulation each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindKind {
    /// No wind.
    Calm,
    /// A fresh random gust every tick, blowing roughly along +x.
    Gusty,
}

impl WindKind {
    /// Samples this tick's wind vector.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Vec3 {
        match self {
            WindKind::Calm => Vec3::ZERO,
            WindKind::Gusty => gust(rng),
        }
    }
}

/// A random gust in a cone of half-angle π/6 around the +x axis,
/// with magnitude uniform in [0, 0.5).
pub fn gust<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let alpha = std::f32::consts::PI * rng.random::<f32>() / 6.0;
    let beta = 2.0 * std::f32::consts::PI * rng.random::<f32>();
    let direction = Vec3::new(
        alpha.cos(),
        alpha.sin() * beta.cos(),
        alpha.sin() * beta.sin(),
    );
    direction * (rng.random::<f32>() * 0.5)
}

/// A fully specified headless run.
///
/// Scalar fields come before the `sheet`/`context` tables so the
/// config serializes to valid TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of rendered frames to simulate.
    pub frames: u32,
    /// Simulated wall-clock duration of one frame (milliseconds). The
    /// frame clock converts this into whole ticks of `context.dt`.
    pub frame_ms: f64,
    /// Wind model.
    pub wind: WindKind,
    /// Sheet construction parameters.
    pub sheet: SheetConfig,
    /// Gravity and timestep.
    pub context: SimulationContext,
}

impl Default for RunConfig {
    /// The canonical hanging sheet in gusty wind: 2 seconds at 60 fps.
    fn default() -> Self {
        Self {
            frames: 120,
            frame_ms: 1000.0 / 60.0,
            wind: WindKind::Gusty,
            sheet: SheetConfig::default(),
            context: SimulationContext {
                // Explicit Euler: the 10×10 sheet's lightest corner
                // particles need dt well under 2·(c/m)/ω² to stay
                // stable at k = 50.
                dt: 1.0e-5,
                ..Default::default()
            },
        }
    }
}
