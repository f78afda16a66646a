// Lattice module: segment positions of the hexagonal primary mirror
// This module builds the candidate hole positions and snaps arbitrary input onto them

// ======================== MODULE DECLARATIONS ========================
pub mod aperture;
pub mod hex_grid;
pub mod snapping;

mod _tests_hex_grid;

// ======================== HEXAGONAL GRID ========================
pub use hex_grid::{
    HexIndex,        // struct - axial (i, j) index of a lattice site
    hex_grid_coords, // fn(grid_radius: i32, pitch: f64) -> Vec<(HexIndex, Vector2<f64>)> - full hexagon of sites
};
// HexIndex impl methods:
//   new(i: i32, j: i32) -> Self                      - creates an axial index
//   to_cartesian(&self, pitch: f64) -> Vector2<f64>  - pitch * (i + j/2, j * sqrt(3)/2)
//   ring(&self) -> i32                               - hexagonal distance from the centre
//   rotated(&self, steps: i32) -> HexIndex           - rotates by multiples of 60 degrees
//   on_spider(&self) -> bool                         - lies on y = 0, y = sqrt(3) x or y = -sqrt(3) x

// ======================== APERTURE GENERATION ========================
pub use aperture::{
    Aperture,        // struct - filtered, immutable set of segment positions
    ApertureBuilder, // struct - builder over ApertureConfig
    elt_aperture,    // fn(pitch: f64) -> Result<Aperture, MaskError> - ELT layout (732 segments)
    generate,        // fn(grid_radius: i32, obstruction_radius: i32, pitch: f64) -> Result<Aperture, MaskError>
};
// Aperture impl methods:
//   from_config(config: ApertureConfig) -> Result<Self, MaskError> - runs the filter pipeline
//   points(&self) -> &[Vector2<f64>]                 - segment positions in generation order
//   hex_indices(&self) -> &[HexIndex]                - axial indices parallel to points
//   snap(&self, candidate: Vector2<f64>) -> Option<(usize, Vector2<f64>)> - nearest segment
//   is_on_lattice(&self, point: Vector2<f64>) -> bool - coincides with a segment position
//   position_of(&self, index: HexIndex) -> Option<usize> - lookup by axial index

// ======================== SNAPPING ========================
pub use snapping::{
    distance_to_nearest, // fn(points: &[Vector2<f64>], candidate: Vector2<f64>) -> Option<f64>
    nearest_point_index, // fn(points: &[Vector2<f64>], candidate: Vector2<f64>) -> Option<usize> - first wins ties
};
