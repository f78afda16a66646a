use std::path::Path;

use log::{info, warn};
use nalgebra::Vector2;

use crate::baselines::BaselineModel;
use crate::config::{
    ApertureConfig, DEFAULT_ROUNDING_DIGITS, FILTER_ROUNDING_DIGITS, MAX_ROUNDING_DIGITS,
    SNAP_WARN_DISTANCE,
};
use crate::error::MaskError;
use crate::lattice::Aperture;
use crate::mask::ApertureMask;
use crate::store;

/// Outcome of replacing the mask from a file or text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSummary {
    /// Holes now in the mask
    pub holes: usize,
    /// Largest distance a loaded hole moved to reach its segment
    pub max_shift: f64,
    /// `max_shift` exceeds `SNAP_WARN_DISTANCE` pitches: the source does not fit this aperture
    pub off_lattice: bool,
}

/// Single owner of the aperture, the mask and the derived baselines.
///
/// All edits go through `&mut self`, so there is exactly one writer. Baseline
/// results are cached against the mask revision: [`MaskEditor::baselines`] never
/// hands out a result computed before the latest edit.
#[derive(Debug, Clone)]
pub struct MaskEditor {
    aperture: Aperture,
    mask: ApertureMask,
    rounding_digits: u32,
    baselines: Option<BaselineModel>,
}

impl MaskEditor {
    /// Editor with an empty mask over `aperture`
    pub fn new(aperture: Aperture) -> Self {
        MaskEditor {
            aperture,
            mask: ApertureMask::new(),
            rounding_digits: DEFAULT_ROUNDING_DIGITS,
            baselines: None,
        }
    }

    /// Generate the aperture from `config` and start with an empty mask
    pub fn from_config(config: ApertureConfig) -> Result<Self, MaskError> {
        Ok(Self::new(Aperture::from_config(config)?))
    }

    pub fn with_rounding_digits(mut self, rounding_digits: u32) -> Self {
        self.set_rounding_digits(rounding_digits);
        self
    }

    // ------------------------- read access -------------------------

    /// Every candidate segment position
    pub fn lattice(&self) -> &[Vector2<f64>] {
        self.aperture.points()
    }

    pub fn aperture(&self) -> &Aperture {
        &self.aperture
    }

    pub fn mask(&self) -> &ApertureMask {
        &self.mask
    }

    pub fn all_holes(&self) -> &[Vector2<f64>] {
        self.mask.holes()
    }

    pub fn hole_count(&self) -> usize {
        self.mask.len()
    }

    /// First hole within `radius` of `point`
    pub fn hole_at(&self, point: Vector2<f64>, radius: f64) -> Option<usize> {
        self.mask.hole_at(point, radius)
    }

    pub fn rounding_digits(&self) -> u32 {
        self.rounding_digits
    }

    // ------------------------- editing -------------------------

    pub fn add_hole(&mut self, point: Vector2<f64>) -> Option<usize> {
        self.mask.add_hole(&self.aperture, point)
    }

    pub fn remove_hole_at(&mut self, index: usize) -> Option<Vector2<f64>> {
        self.mask.remove_hole(index)
    }

    pub fn remove_hole_near(&mut self, point: Vector2<f64>, radius: f64) -> Option<Vector2<f64>> {
        self.mask.remove_hole_at(point, radius)
    }

    pub fn move_hole(&mut self, index: usize, point: Vector2<f64>) -> Option<Vector2<f64>> {
        self.mask.move_hole(index, &self.aperture, point)
    }

    pub fn clear(&mut self) {
        self.mask.clear();
    }

    pub fn set_rounding_digits(&mut self, rounding_digits: u32) {
        self.rounding_digits = rounding_digits.min(MAX_ROUNDING_DIGITS);
    }

    // ------------------------- baselines -------------------------

    /// Recompute unconditionally and cache the result
    pub fn recompute_baselines(&mut self) -> &BaselineModel {
        let model = BaselineModel::compute(&self.mask, self.rounding_digits);
        self.baselines.insert(model)
    }

    /// Current baselines, recomputed only if the mask or the rounding changed
    pub fn baselines(&mut self) -> &BaselineModel {
        let fresh = self.baselines.as_ref().is_some_and(|model| {
            !model.is_stale(&self.mask) && model.rounding_digits() == self.rounding_digits
        });
        if !fresh {
            self.baselines = None;
        }
        match self.baselines {
            Some(ref model) => model,
            None => self.recompute_baselines(),
        }
    }

    /// uv points sampled by exactly one pair, binned at the finer filtering precision
    pub fn non_redundant_baselines(&self) -> BaselineModel {
        BaselineModel::compute(&self.mask, FILTER_ROUNDING_DIGITS).filter_non_redundant()
    }

    // ------------------------- persistence -------------------------

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MaskError> {
        store::save(path, self.mask.holes())
    }

    /// Replace the mask with the holes stored at `path`, snapped onto the aperture.
    ///
    /// Check [`LoadSummary::off_lattice`] before saving back over the source file.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, MaskError> {
        let holes = store::load(path)?;
        Ok(self.install_holes(holes))
    }

    /// Seed the mask from `path` when the file exists; `None` leaves the mask as it is.
    pub fn load_or_empty<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<Option<LoadSummary>, MaskError> {
        let path = path.as_ref();
        if !store::exists(path) {
            info!("No mask file at {}, starting from an empty mask", path.display());
            return Ok(None);
        }
        self.load(path).map(Some)
    }

    pub fn to_mask_text(&self) -> String {
        store::format_holes(self.mask.holes())
    }

    /// Same as [`MaskEditor::load`] from in-memory text; the mask is untouched on error.
    pub fn load_mask_text(&mut self, text: &str) -> Result<LoadSummary, MaskError> {
        let holes = store::parse_holes(text)?;
        Ok(self.install_holes(holes))
    }

    fn install_holes(&mut self, holes: Vec<Vector2<f64>>) -> LoadSummary {
        self.mask.replace_holes(holes);
        let max_shift = self.mask.snap_all(&self.aperture);
        let off_lattice = max_shift > SNAP_WARN_DISTANCE * self.aperture.pitch();
        if off_lattice {
            warn!(
                "Loaded mask is off the lattice by up to {:.4}; holes were snapped to the nearest segments",
                max_shift
            );
        }
        self.baselines = None;
        LoadSummary {
            holes: self.mask.len(),
            max_shift,
            off_lattice,
        }
    }
}
