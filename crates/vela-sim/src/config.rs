//! Sheet construction parameters.

use serde::{Deserialize, Serialize};
use vela_types::constants::DEFAULT_WIND_DRAG;
use vela_types::{Scalar, VelaError, VelaResult};

/// Configuration for building a [`Sheet`](crate::Sheet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Total sheet mass (kg), partitioned across the lattice.
    pub total_mass: Scalar,

    /// Total damping (N·s/m), partitioned like mass.
    pub total_damping: Scalar,

    /// Physical width (meters), along x.
    pub width: Scalar,

    /// Physical height (meters), along y.
    pub height: Scalar,

    /// Patch resolution along x.
    pub patches_x: usize,

    /// Patch resolution along y.
    pub patches_y: usize,

    /// Wind drag coefficient (dimensionless) for the wind force model.
    pub wind_drag: Scalar,
}

impl Default for SheetConfig {
    /// The canonical hanging sheet: 0.2 kg, 1.0 N·s/m, 0.8 m × 0.6 m,
    /// 10×10 patches.
    fn default() -> Self {
        Self {
            total_mass: 0.2,
            total_damping: 1.0,
            width: 0.8,
            height: 0.6,
            patches_x: 10,
            patches_y: 10,
            wind_drag: DEFAULT_WIND_DRAG,
        }
    }
}

impl SheetConfig {
    /// Checks that the configuration describes a buildable sheet.
    pub fn validate(&self) -> VelaResult<()> {
        if !(self.total_mass > 0.0) {
            return Err(VelaError::InvalidConfig(format!(
                "total_mass must be positive, got {}",
                self.total_mass
            )));
        }
        if !(self.total_damping >= 0.0) {
            return Err(VelaError::InvalidConfig(format!(
                "total_damping must be non-negative, got {}",
                self.total_damping
            )));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(VelaError::InvalidConfig(format!(
                "sheet dimensions must be positive, got {} × {}",
                self.width, self.height
            )));
        }
        if self.patches_x == 0 || self.patches_y == 0 {
            return Err(VelaError::InvalidConfig(format!(
                "patch resolution must be at least 1, got {}×{}",
                self.patches_x, self.patches_y
            )));
        }
        if !(self.wind_drag >= 0.0) {
            return Err(VelaError::InvalidConfig(format!(
                "wind_drag must be non-negative, got {}",
                self.wind_drag
            )));
        }
        Ok(())
    }

    /// Undeformed patch width (meters).
    #[inline]
    pub fn patch_width(&self) -> Scalar {
        self.width / self.patches_x as Scalar
    }

    /// Undeformed patch height (meters).
    #[inline]
    pub fn patch_height(&self) -> Scalar {
        self.height / self.patches_y as Scalar
    }
}
