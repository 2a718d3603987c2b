//! Simulation event types.
//!
//! Structured events emitted by the simulation driver at various points
//! in each tick. Events are lightweight value types that carry just
//! enough data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with a tick index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number (0-indexed).
    pub tick: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Target simulation time for this tick (seconds).
        sim_time: f64,
    },

    /// Tick completed.
    TickEnd {
        /// Wall-clock time for the entire tick (seconds).
        wall_time: f64,
    },

    /// Energy snapshot at current state.
    Energy {
        /// Kinetic energy (0.5 · m · v²).
        kinetic: f64,
    },

    /// Numeric degeneracy guards fired during the tick. Nonzero counts
    /// mean part of the sheet has collapsed; positions stay finite but
    /// the geometry there is no longer meaningful.
    DegenerateGeometry {
        /// Springs skipped for coincident endpoints.
        springs_skipped: u32,
        /// Normals left unnormalized for zero accumulation.
        normals_skipped: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u32, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
