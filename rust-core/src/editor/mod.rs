// Editor module: single-writer controller tying aperture, mask, baselines and storage together

// ======================== MODULE DECLARATIONS ========================
pub mod mask_editor;


// ======================== CONTROLLER ========================
pub use mask_editor::{
    LoadSummary, // struct - hole count and largest snap shift after a load
    MaskEditor,  // struct - owns Aperture, ApertureMask and the cached BaselineModel
};
// MaskEditor impl methods:
//   new(aperture: Aperture) -> Self                          - empty mask over an aperture
//   from_config(config: ApertureConfig) -> Result<Self, MaskError>
//   lattice(&self) -> &[Vector2<f64>]                        - candidate positions for rendering
//   add_hole / remove_hole_at / remove_hole_near / move_hole - editing surface, Option results
//   all_holes(&self) -> &[Vector2<f64>]                      - read-only view
//   baselines(&mut self) -> &BaselineModel                   - recomputes when stale
//   recompute_baselines(&mut self) -> &BaselineModel         - forces recomputation
//   non_redundant_baselines(&self) -> BaselineModel          - redundancy-1 subset at filter precision
//   save / load / load_or_empty / to_mask_text / load_mask_text - persistence, loads return LoadSummary
