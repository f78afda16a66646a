// Mask module: the user's selection of open segments

// ======================== MODULE DECLARATIONS ========================
pub mod aperture_mask;


// ======================== MASK EDITING ========================
pub use aperture_mask::ApertureMask; // struct - ordered, index-addressed list of hole positions
// ApertureMask impl methods:
//   new() -> Self                                              - empty mask
//   from_holes(holes: Vec<Vector2<f64>>) -> Self               - wraps raw coordinates
//   add_hole(&mut self, aperture, candidate) -> Option<usize>  - snaps and appends
//   remove_hole(&mut self, index) -> Option<Vector2<f64>>      - deletes, shifting later indices
//   hole_at(&self, query, radius) -> Option<usize>             - first hole within radius
//   remove_hole_at(&mut self, query, radius) -> Option<Vector2<f64>> - hit test + delete
//   move_hole(&mut self, index, aperture, candidate) -> Option<Vector2<f64>> - re-snaps in place
//   snap_all(&mut self, aperture) -> f64                       - snaps every hole, returns max shift
//   holes(&self) -> &[Vector2<f64>]                            - read-only view
//   revision(&self) -> u64                                     - bumped by every successful mutation
