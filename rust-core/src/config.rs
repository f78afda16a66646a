// Constants

use serde::{Deserialize, Serialize};

use crate::error::MaskError;

// Instrument geometry
pub const ELT_GRID_RADIUS: i32 = 18; // Hexagonal rings of the segmented primary
pub const ELT_OBSTRUCTION_RADIUS: i32 = 4; // Rings hidden behind the central obscuration
pub const ELT_SEGMENT_PITCH: f64 = 1.4; // Physical segment pitch in metres
pub const DEFAULT_PITCH: f64 = 1.0; // Lattice units: nearest neighbours one unit apart
pub const CUTOFF_MARGIN: f64 = 0.1; // Soft circular edge sits this many rings inside the hexagon

// Baseline binning
pub const DEFAULT_ROUNDING_DIGITS: u32 = 1; // For uv-plane display
pub const FILTER_ROUNDING_DIGITS: u32 = 3; // For non-redundant filtering
pub const MAX_ROUNDING_DIGITS: u32 = 12; // Finer rounding is below f64 resolution for unit-pitch baselines

// Persistence
pub const DEFAULT_MASK_FILE: &str = "mymask.txt";

// Tolerances
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For coordinate comparisons
pub const SNAP_WARN_DISTANCE: f64 = 1e-3; // Loaded holes farther than this (in pitches) get a warning

/// Parameters of the segmented aperture.
///
/// `None` for `obstruction_radius` disables the central obscuration entirely; the
/// two flags switch the soft circular edge and the spider occlusions on or off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApertureConfig {
    pub grid_radius: i32,
    pub obstruction_radius: Option<i32>,
    pub pitch: f64,
    pub circular_cutoff: bool,
    pub spiders: bool,
}

impl ApertureConfig {
    /// The ELT primary at the given pitch: 18 rings, 4 obscured, all occlusions on.
    pub fn elt(pitch: f64) -> Self {
        ApertureConfig {
            grid_radius: ELT_GRID_RADIUS,
            obstruction_radius: Some(ELT_OBSTRUCTION_RADIUS),
            pitch,
            circular_cutoff: true,
            spiders: true,
        }
    }

    /// A bare hexagon of `grid_radius` rings, nothing removed.
    pub fn full_hexagon(grid_radius: i32, pitch: f64) -> Self {
        ApertureConfig {
            grid_radius,
            obstruction_radius: None,
            pitch,
            circular_cutoff: false,
            spiders: false,
        }
    }

    /// Reject radii and pitches the generator cannot work with.
    pub fn validate(&self) -> Result<(), MaskError> {
        if self.grid_radius <= 0 {
            return Err(MaskError::InvalidConfiguration(format!(
                "grid radius must be positive, got {}",
                self.grid_radius
            )));
        }
        if !self.pitch.is_finite() || self.pitch <= 0.0 {
            return Err(MaskError::InvalidConfiguration(format!(
                "pitch must be a positive finite number, got {}",
                self.pitch
            )));
        }
        if let Some(obstruction) = self.obstruction_radius {
            if obstruction < 0 {
                return Err(MaskError::InvalidConfiguration(format!(
                    "obstruction radius must not be negative, got {}",
                    obstruction
                )));
            }
            if obstruction >= self.grid_radius {
                return Err(MaskError::InvalidConfiguration(format!(
                    "obstruction radius {} must be smaller than grid radius {}",
                    obstruction, self.grid_radius
                )));
            }
        }
        Ok(())
    }
}

impl Default for ApertureConfig {
    fn default() -> Self {
        Self::elt(DEFAULT_PITCH)
    }
}
