//! # vela-grid
//!
//! The particle lattice of the Vela sheet simulation.
//!
//! ## Key Types
//!
//! - [`SurfacePoint`] — a plain geometric point (position + normal)
//! - [`Particle`] — a point mass: a surface point plus physical state
//! - [`SheetGrid`] — the rectangular lattice of particles and patch centers
//! - [`lattice::build_lattice`] — grid topology builder with the
//!   boundary-aware mass/damping partition
//! - [`geometry::update_geometry`] — patch-center and normal recomputation

pub mod buffers;
pub mod geometry;
pub mod grid;
pub mod lattice;
pub mod particle;
pub mod point;

pub use grid::SheetGrid;
pub use lattice::build_lattice;
pub use particle::Particle;
pub use point::SurfacePoint;
