//! # vela-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (timing, energy, numeric-guard counts) that can be consumed by
//! pluggable sinks (tracing output, in-memory capture, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::SimulationEvent;
