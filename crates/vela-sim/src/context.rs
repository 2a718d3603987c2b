//! The shared simulation environment: gravity and timestep.
//!
//! An explicit value owned by the caller and passed by reference into
//! the force and integration routines — not a global — so simulation
//! instances stay independent and testable in isolation.

use serde::{Deserialize, Serialize};
use vela_math::Vec3;
use vela_types::constants::{DEFAULT_DT, GRAVITY};
use vela_types::Scalar;

/// Gravity vector and fixed integration timestep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationContext {
    /// Gravity `[gx, gy, gz]` in m/s².
    pub gravity: [Scalar; 3],
    /// Integration timestep (seconds). Stability under the explicit
    /// integrator is the caller's responsibility via this choice,
    /// relative to stiffness and particle mass.
    pub dt: Scalar,
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self {
            gravity: [0.0, -GRAVITY, 0.0],
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationContext {
    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }
}
