//! # vela-math
//!
//! Math primitives for the Vela simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`) as the canonical vector types
//! - The Hookean spring force law with its degeneracy guard
//! - Triangle face-normal computation and guarded normalization

pub mod spring;
pub mod triangle;

// Re-export glam types as the canonical math types for Vela.
pub use glam::{Vec2, Vec3};
