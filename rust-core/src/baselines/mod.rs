// Baselines module: uv-plane sampling and redundancy of an aperture mask

// ======================== MODULE DECLARATIONS ========================
pub mod baseline_model;

// Test modules
mod _tests_baseline_model;

// ======================== BASELINE MODEL ========================
pub use baseline_model::{
    Baseline,       // struct - hole pair (i < j) and its vector pos[j] - pos[i]
    BaselineModel,  // struct - all pairs, redundancy bins and per-pair lookups
    RedundancyBin,  // struct - canonical uv vector plus member pairs
    canonical_uv,   // fn(vector: Vector2<f64>, rounding_digits: u32) -> Vector2<f64> - sign-folded rounded vector
};
// BaselineModel impl methods:
//   compute(mask: &ApertureMask, rounding_digits: u32) -> Self  - full recomputation
//   compute_from_holes(holes, rounding_digits, revision) -> Self - same on raw coordinates
//   filter_non_redundant(&self) -> Self                       - keeps redundancy-1 uv points only
//   uv_points(&self) -> Vec<Vector2<f64>>                     - one vector per distinct frequency
//   redundancy(&self) -> Vec<usize>                           - parallel to uv_points
//   pair_redundancy(&self) -> Vec<usize>                      - parallel to baselines
//   uv_display_offsets(&self) -> Vec<(Vector2<f64>, Vector2<f64>)> - (+v/2, -v/2) per uv point
//   is_stale(&self, mask: &ApertureMask) -> bool              - mask mutated since computation
