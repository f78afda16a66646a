use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::lattice::Aperture;

/// Ordered set of mask holes, addressed by insertion index.
///
/// Removing a hole shifts every later index down by one; callers holding an index
/// across a removal must resolve it again. Every successful mutation bumps
/// [`ApertureMask::revision`], which baseline results use to detect staleness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApertureMask {
    holes: Vec<Vector2<f64>>,
    revision: u64,
}

impl ApertureMask {
    /// Create an empty mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap raw coordinates as they are, e.g. after loading from disk
    pub fn from_holes(holes: Vec<Vector2<f64>>) -> Self {
        ApertureMask { holes, revision: 0 }
    }

    /// Snap `candidate` onto the nearest segment and append it.
    ///
    /// Returns the index of the new hole. Segments already in the mask are accepted
    /// again: duplicates are allowed at this layer.
    pub fn add_hole(&mut self, aperture: &Aperture, candidate: Vector2<f64>) -> Option<usize> {
        let (segment, position) = aperture.snap(candidate)?;
        let index = self.holes.len();
        self.holes.push(position);
        self.touch();
        debug!(
            "Added hole {} at segment {} ({:.4}, {:.4})",
            index, segment, position.x, position.y
        );
        Some(index)
    }

    /// Delete the hole at `index`; a no-op returning `None` when out of range.
    pub fn remove_hole(&mut self, index: usize) -> Option<Vector2<f64>> {
        if index >= self.holes.len() {
            return None;
        }
        let removed = self.holes.remove(index);
        self.touch();
        debug!("Removed hole {} ({:.4}, {:.4})", index, removed.x, removed.y);
        Some(removed)
    }

    /// First hole whose disc of the given radius contains `query`.
    pub fn hole_at(&self, query: Vector2<f64>, radius: f64) -> Option<usize> {
        self.holes
            .iter()
            .position(|hole| (hole - query).norm() <= radius)
    }

    /// Remove the first hole under `query`; clicking empty space does nothing.
    pub fn remove_hole_at(&mut self, query: Vector2<f64>, radius: f64) -> Option<Vector2<f64>> {
        let index = self.hole_at(query, radius)?;
        self.remove_hole(index)
    }

    /// Re-snap hole `index` to the segment nearest `candidate`.
    ///
    /// Returns the new position, or `None` (mask untouched) for a bad index.
    pub fn move_hole(
        &mut self,
        index: usize,
        aperture: &Aperture,
        candidate: Vector2<f64>,
    ) -> Option<Vector2<f64>> {
        if index >= self.holes.len() {
            return None;
        }
        let (_, position) = aperture.snap(candidate)?;
        self.holes[index] = position;
        self.touch();
        Some(position)
    }

    /// Snap every hole onto the aperture; returns the largest displacement applied.
    pub fn snap_all(&mut self, aperture: &Aperture) -> f64 {
        let mut max_shift: f64 = 0.0;
        for hole in self.holes.iter_mut() {
            if let Some((_, position)) = aperture.snap(*hole) {
                max_shift = max_shift.max((position - *hole).norm());
                *hole = position;
            }
        }
        self.touch();
        max_shift
    }

    /// Swap in a new hole list, keeping the revision counter monotonic.
    pub fn replace_holes(&mut self, holes: Vec<Vector2<f64>>) {
        self.holes = holes;
        self.touch();
    }

    pub fn clear(&mut self) {
        self.holes.clear();
        self.touch();
    }

    /// All holes in insertion order
    pub fn holes(&self) -> &[Vector2<f64>] {
        &self.holes
    }

    pub fn hole(&self, index: usize) -> Option<Vector2<f64>> {
        self.holes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Mutation counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
