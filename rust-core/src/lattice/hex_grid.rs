use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axial index of a hexagonal lattice site.
///
/// The site sits at `pitch * (i + j/2, j * sqrt(3)/2)`; `i` runs along the x-axis and
/// `j` along the 60° direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexIndex {
    pub i: i32,
    pub j: i32,
}

impl HexIndex {
    pub fn new(i: i32, j: i32) -> Self {
        HexIndex { i, j }
    }

    /// Cartesian position for a lattice of the given pitch.
    pub fn to_cartesian(&self, pitch: f64) -> Vector2<f64> {
        let i = self.i as f64;
        let j = self.j as f64;
        Vector2::new(pitch * (i + 0.5 * j), pitch * j * 3.0_f64.sqrt() / 2.0)
    }

    /// Hexagonal ring number (0 for the centre, 1 for its six neighbours, ...).
    pub fn ring(&self) -> i32 {
        self.i.abs().max(self.j.abs()).max((self.i + self.j).abs())
    }

    /// Rotate counter-clockwise about the origin by `steps` multiples of 60°.
    pub fn rotated(&self, steps: i32) -> HexIndex {
        let mut index = *self;
        for _ in 0..steps.rem_euclid(6) {
            // a1 -> a2, a2 -> a2 - a1
            index = HexIndex::new(-index.j, index.i + index.j);
        }
        index
    }

    /// True if the site lies on one of the three lines y = 0, y = sqrt(3) x, y = -sqrt(3) x.
    pub fn on_spider(&self) -> bool {
        self.j == 0 || self.i == 0 || self.i + self.j == 0
    }
}

/// Every site of a hexagon of `grid_radius` rings, with its Cartesian position.
///
/// Sites are produced with `j` as the outer and `i` as the inner loop, both running
/// over `[-grid_radius, grid_radius]`; only sites with `|i + j| <= grid_radius` are
/// kept, which clips the rhombus to a hexagon of `3R(R+1) + 1` sites.
pub fn hex_grid_coords(grid_radius: i32, pitch: f64) -> Vec<(HexIndex, Vector2<f64>)> {
    if grid_radius < 0 {
        return Vec::new();
    }
    let capacity = (3 * grid_radius * (grid_radius + 1) + 1) as usize;
    let mut sites = Vec::with_capacity(capacity);

    for j in -grid_radius..=grid_radius {
        for i in -grid_radius..=grid_radius {
            if (i + j).abs() > grid_radius {
                continue;
            }
            let index = HexIndex::new(i, j);
            sites.push((index, index.to_cartesian(pitch)));
        }
    }

    sites
}
