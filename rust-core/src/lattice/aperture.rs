use log::{debug, info};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{ApertureConfig, CUTOFF_MARGIN, DEFAULT_PITCH, LATTICE_TOLERANCE};
use crate::error::MaskError;
use crate::lattice::hex_grid::{HexIndex, hex_grid_coords};
use crate::lattice::snapping::nearest_point_index;

/// The fixed set of segment positions a mask hole may occupy.
///
/// Generated once, never mutated: indices into [`Aperture::points`] are stable for
/// the lifetime of the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aperture {
    config: ApertureConfig,
    points: Vec<Vector2<f64>>,
    indices: Vec<HexIndex>,
}

impl Aperture {
    /// Run the full generation pipeline for `config`.
    pub fn from_config(config: ApertureConfig) -> Result<Self, MaskError> {
        config.validate()?;

        let radius = config.grid_radius;
        let pitch = config.pitch;
        let sites = hex_grid_coords(radius, pitch);
        let total = sites.len();

        // Sites of the obscuration hexagon share the construction of the primary grid,
        // so coincidence is decided on the axial index rather than on floats.
        let obstruction: Vec<HexIndex> = match config.obstruction_radius {
            Some(obstruction_radius) => hex_grid_coords(obstruction_radius, pitch)
                .into_iter()
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        };

        let cutoff = (radius as f64 - CUTOFF_MARGIN) * pitch * 3.0_f64.sqrt() / 2.0;

        let mut points = Vec::with_capacity(total);
        let mut indices = Vec::with_capacity(total);
        let mut obstructed = 0usize;
        let mut clipped = 0usize;
        let mut occluded = 0usize;

        for (index, position) in sites {
            if obstruction.contains(&index) {
                obstructed += 1;
                continue;
            }
            if config.circular_cutoff && position.norm() >= cutoff {
                clipped += 1;
                continue;
            }
            if config.spiders && index.on_spider() {
                occluded += 1;
                continue;
            }
            points.push(position);
            indices.push(index);
        }

        debug!(
            "Aperture filters: {} sites, {} obstructed, {} outside cutoff, {} under spiders",
            total, obstructed, clipped, occluded
        );
        info!(
            "Generated aperture with {} segments (grid radius {}, pitch {})",
            points.len(),
            radius,
            pitch
        );

        Ok(Aperture {
            config,
            points,
            indices,
        })
    }

    /// Parameters this aperture was generated from
    pub fn config(&self) -> &ApertureConfig {
        &self.config
    }

    /// Segment positions in generation order
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Axial indices, parallel to [`Aperture::points`]
    pub fn hex_indices(&self) -> &[HexIndex] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pitch(&self) -> f64 {
        self.config.pitch
    }

    pub fn point(&self, index: usize) -> Option<Vector2<f64>> {
        self.points.get(index).copied()
    }

    /// Position in the point list of the segment with the given axial index
    pub fn position_of(&self, index: HexIndex) -> Option<usize> {
        self.indices.iter().position(|&candidate| candidate == index)
    }

    pub fn contains_index(&self, index: HexIndex) -> bool {
        self.position_of(index).is_some()
    }

    /// Nearest segment to `candidate`, as (index, exact lattice position).
    pub fn snap(&self, candidate: Vector2<f64>) -> Option<(usize, Vector2<f64>)> {
        let idx = nearest_point_index(&self.points, candidate)?;
        Some((idx, self.points[idx]))
    }

    /// True if `point` coincides with a segment position up to floating-point noise.
    pub fn is_on_lattice(&self, point: Vector2<f64>) -> bool {
        self.snap(point)
            .map(|(_, snapped)| (snapped - point).norm() <= LATTICE_TOLERANCE * self.config.pitch)
            .unwrap_or(false)
    }
}

/// Builder for constructing an [`Aperture`]
pub struct ApertureBuilder {
    config: ApertureConfig,
}

impl ApertureBuilder {
    /// Start from the ELT layout at unit pitch
    pub fn new() -> Self {
        ApertureBuilder {
            config: ApertureConfig::elt(DEFAULT_PITCH),
        }
    }

    /// Replace every parameter at once
    pub fn with_config(mut self, config: ApertureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_grid_radius(mut self, grid_radius: i32) -> Self {
        self.config.grid_radius = grid_radius;
        self
    }

    /// Rings hidden by the central obscuration; `None` keeps the centre open
    pub fn with_obstruction_radius(mut self, obstruction_radius: Option<i32>) -> Self {
        self.config.obstruction_radius = obstruction_radius;
        self
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.config.pitch = pitch;
        self
    }

    pub fn with_circular_cutoff(mut self, enabled: bool) -> Self {
        self.config.circular_cutoff = enabled;
        self
    }

    pub fn with_spiders(mut self, enabled: bool) -> Self {
        self.config.spiders = enabled;
        self
    }

    /// Build the aperture
    pub fn build(self) -> Result<Aperture, MaskError> {
        Aperture::from_config(self.config)
    }
}

impl Default for ApertureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an aperture with every exclusion rule active
pub fn generate(
    grid_radius: i32,
    obstruction_radius: i32,
    pitch: f64,
) -> Result<Aperture, MaskError> {
    ApertureBuilder::new()
        .with_grid_radius(grid_radius)
        .with_obstruction_radius(Some(obstruction_radius))
        .with_pitch(pitch)
        .build()
}

/// The ELT primary mirror (18 rings, 4 obscured, spiders and soft edge removed)
pub fn elt_aperture(pitch: f64) -> Result<Aperture, MaskError> {
    Aperture::from_config(ApertureConfig::elt(pitch))
}
