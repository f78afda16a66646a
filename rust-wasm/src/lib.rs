use hexmask::config::ApertureConfig;
use hexmask::lattice::elt_aperture;
use hexmask::MaskEditor;
use nalgebra::Vector2;
use wasm_bindgen::prelude::*;

mod common;
pub mod utils;

pub use common::{BaselineData, LoadData, PairData, Point};
use utils::to_js_error;

// Enable console logging and panic hooks for debugging
#[wasm_bindgen(start)]
pub fn main() {
    utils::set_panic_hook();
}

/// WASM wrapper around the mask editor
///
/// Coordinates go in and out as plain numbers or `{ x, y }` objects; indices
/// refer to the current hole order and shift down after a removal.
#[wasm_bindgen]
pub struct WasmMaskEditor {
    inner: MaskEditor,
}

#[wasm_bindgen]
impl WasmMaskEditor {
    /// Create an editor from an optional `ApertureConfig` object; the ELT layout by default
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmMaskEditor, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ApertureConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js_error("Failed to parse aperture configuration", e))?
        };

        let inner = MaskEditor::from_config(config)
            .map_err(|e| to_js_error("Failed to generate aperture", e))?;
        console_log!("Aperture ready with {} segments", inner.lattice().len());
        Ok(WasmMaskEditor { inner })
    }

    /// Candidate segment positions as an array of points
    #[wasm_bindgen(js_name = getLattice)]
    pub fn get_lattice(&self) -> Result<JsValue, JsValue> {
        let points: Vec<Point> = self.inner.lattice().iter().map(|p| Point::from(*p)).collect();
        serde_wasm_bindgen::to_value(&points)
            .map_err(|e| to_js_error("Failed to serialize lattice", e))
    }

    /// Snap (x, y) to the nearest segment and add it; returns the new hole index
    #[wasm_bindgen(js_name = addHole)]
    pub fn add_hole(&mut self, x: f64, y: f64) -> Option<usize> {
        self.inner.add_hole(Vector2::new(x, y))
    }

    /// Remove a hole by index; returns the removed point or `undefined`
    #[wasm_bindgen(js_name = removeHoleAt)]
    pub fn remove_hole_at(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let removed = self.inner.remove_hole_at(index).map(Point::from);
        serde_wasm_bindgen::to_value(&removed)
            .map_err(|e| to_js_error("Failed to serialize point", e))
    }

    /// Remove the first hole within `radius` of (x, y)
    #[wasm_bindgen(js_name = removeHoleNear)]
    pub fn remove_hole_near(&mut self, x: f64, y: f64, radius: f64) -> Result<JsValue, JsValue> {
        let removed = self
            .inner
            .remove_hole_near(Vector2::new(x, y), radius)
            .map(Point::from);
        serde_wasm_bindgen::to_value(&removed)
            .map_err(|e| to_js_error("Failed to serialize point", e))
    }

    #[wasm_bindgen(js_name = moveHole)]
    pub fn move_hole(&mut self, index: usize, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let moved = self.inner.move_hole(index, Vector2::new(x, y)).map(Point::from);
        serde_wasm_bindgen::to_value(&moved)
            .map_err(|e| to_js_error("Failed to serialize point", e))
    }

    #[wasm_bindgen(js_name = holeAt)]
    pub fn hole_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        self.inner.hole_at(Vector2::new(x, y), radius)
    }

    #[wasm_bindgen(js_name = allHoles)]
    pub fn all_holes(&self) -> Result<JsValue, JsValue> {
        let holes: Vec<Point> = self.inner.all_holes().iter().map(|p| Point::from(*p)).collect();
        serde_wasm_bindgen::to_value(&holes)
            .map_err(|e| to_js_error("Failed to serialize holes", e))
    }

    #[wasm_bindgen(js_name = holeCount)]
    pub fn hole_count(&self) -> usize {
        self.inner.hole_count()
    }

    #[wasm_bindgen(js_name = setRoundingDigits)]
    pub fn set_rounding_digits(&mut self, digits: u32) {
        self.inner.set_rounding_digits(digits);
    }

    /// `{ uv, redundancy, pairs, pairRedundancy }` for the current mask
    #[wasm_bindgen(js_name = recomputeBaselines)]
    pub fn recompute_baselines(&mut self) -> Result<JsValue, JsValue> {
        let data = BaselineData::from(self.inner.recompute_baselines());
        serde_wasm_bindgen::to_value(&data)
            .map_err(|e| to_js_error("Failed to serialize baselines", e))
    }

    /// Same layout, keeping only uv points sampled by a single pair
    #[wasm_bindgen(js_name = nonRedundantBaselines)]
    pub fn non_redundant_baselines(&self) -> Result<JsValue, JsValue> {
        let data = BaselineData::from(&self.inner.non_redundant_baselines());
        serde_wasm_bindgen::to_value(&data)
            .map_err(|e| to_js_error("Failed to serialize baselines", e))
    }

    /// Mask in the on-disk text format
    #[wasm_bindgen(js_name = toMaskText)]
    pub fn to_mask_text(&self) -> String {
        self.inner.to_mask_text()
    }

    /// Replace the mask from text; returns `{ holes, maxShift, offLattice }`
    #[wasm_bindgen(js_name = loadMaskText)]
    pub fn load_mask_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let summary = self
            .inner
            .load_mask_text(text)
            .map_err(|e| to_js_error("Failed to load mask", e))?;
        if summary.off_lattice {
            console_log!("Loaded {} holes, snapped by up to {:.4}", summary.holes, summary.max_shift);
        } else {
            console_log!("Loaded {} holes", summary.holes);
        }
        serde_wasm_bindgen::to_value(&LoadData::from(summary))
            .map_err(|e| to_js_error("Failed to serialize load summary", e))
    }
}

impl WasmMaskEditor {
    /// Access to the wrapped editor from Rust
    pub fn editor(&self) -> &MaskEditor {
        &self.inner
    }
}

/// Number of segments in the ELT aperture
#[wasm_bindgen(js_name = eltSegmentCount)]
pub fn elt_segment_count() -> Result<usize, JsValue> {
    let aperture = elt_aperture(1.0).map_err(|e| to_js_error("Failed to generate aperture", e))?;
    Ok(aperture.len())
}

/// Get the version of the library
#[wasm_bindgen]
pub fn version() -> String {
    hexmask::VERSION.to_string()
}
