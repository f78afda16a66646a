use std::collections::HashMap;

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::MAX_ROUNDING_DIGITS;
use crate::mask::ApertureMask;

/// One hole pair `i < j` and its vector `pos[j] - pos[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub i: usize,
    pub j: usize,
    pub vector: Vector2<f64>,
}

/// Baselines sharing one spatial frequency after rounding and sign folding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedundancyBin {
    /// Canonical rounded vector: the lexicographically larger of `v` and `-v`.
    pub uv: Vector2<f64>,
    /// Positions in [`BaselineModel::baselines`] of the member pairs.
    pub pairs: Vec<usize>,
}

impl RedundancyBin {
    pub fn redundancy(&self) -> usize {
        self.pairs.len()
    }
}

/// uv-plane sampling of a mask and the redundancy of every baseline.
///
/// Results are replaced wholesale on each computation; there is no incremental
/// update. An empty model (fewer than two holes) is a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineModel {
    baselines: Vec<Baseline>,
    bins: Vec<RedundancyBin>,
    pair_bins: Vec<usize>,
    rounding_digits: u32,
    mask_revision: u64,
}

impl BaselineModel {
    /// Compute the baselines of `mask`, merging vectors equal to `rounding_digits` decimals.
    pub fn compute(mask: &ApertureMask, rounding_digits: u32) -> Self {
        Self::compute_from_holes(mask.holes(), rounding_digits, mask.revision())
    }

    /// Same as [`BaselineModel::compute`] on a bare coordinate list.
    pub fn compute_from_holes(
        holes: &[Vector2<f64>],
        rounding_digits: u32,
        mask_revision: u64,
    ) -> Self {
        let rounding_digits = rounding_digits.min(MAX_ROUNDING_DIGITS);
        let nh = holes.len();
        let n_pairs = nh * nh.saturating_sub(1) / 2;

        let mut baselines = Vec::with_capacity(n_pairs);
        let mut bins: Vec<RedundancyBin> = Vec::new();
        let mut pair_bins = Vec::with_capacity(n_pairs);
        let mut bin_lookup: HashMap<(u64, u64), usize> = HashMap::new();

        for i in 0..nh {
            for j in (i + 1)..nh {
                let vector = holes[j] - holes[i];
                let key = canonical_key(vector, rounding_digits);
                let pair = baselines.len();

                let bin = *bin_lookup.entry(key_bits(key)).or_insert_with(|| {
                    bins.push(RedundancyBin {
                        uv: key_to_vector(key, rounding_digits),
                        pairs: Vec::new(),
                    });
                    bins.len() - 1
                });
                bins[bin].pairs.push(pair);
                pair_bins.push(bin);
                baselines.push(Baseline { i, j, vector });
            }
        }

        debug!(
            "Baselines for {} holes: {} pairs in {} distinct uv points ({} digits)",
            nh,
            baselines.len(),
            bins.len(),
            rounding_digits
        );

        BaselineModel {
            baselines,
            bins,
            pair_bins,
            rounding_digits,
            mask_revision,
        }
    }

    /// Keep only the uv points sampled by a single hole pair.
    pub fn filter_non_redundant(&self) -> Self {
        let mut baselines = Vec::new();
        let mut bins = Vec::new();
        let mut pair_bins = Vec::new();

        for bin in self.bins.iter().filter(|bin| bin.redundancy() == 1) {
            let pair = bin.pairs[0];
            bins.push(RedundancyBin {
                uv: bin.uv,
                pairs: vec![baselines.len()],
            });
            pair_bins.push(bins.len() - 1);
            baselines.push(self.baselines[pair]);
        }

        BaselineModel {
            baselines,
            bins,
            pair_bins,
            rounding_digits: self.rounding_digits,
            mask_revision: self.mask_revision,
        }
    }

    /// Every hole pair, `i` outer and `j > i` inner
    pub fn baselines(&self) -> &[Baseline] {
        &self.baselines
    }

    /// Redundancy bins in order of first appearance
    pub fn bins(&self) -> &[RedundancyBin] {
        &self.bins
    }

    /// One canonical vector per distinct spatial frequency
    pub fn uv_points(&self) -> Vec<Vector2<f64>> {
        self.bins.iter().map(|bin| bin.uv).collect()
    }

    /// Redundancy of each uv point, parallel to [`BaselineModel::uv_points`]
    pub fn redundancy(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.redundancy()).collect()
    }

    /// Bin of each pair, parallel to [`BaselineModel::baselines`]
    pub fn pair_bins(&self) -> &[usize] {
        &self.pair_bins
    }

    /// Redundancy of each pair, parallel to [`BaselineModel::baselines`]
    pub fn pair_redundancy(&self) -> Vec<usize> {
        self.pair_bins
            .iter()
            .map(|&bin| self.bins[bin].redundancy())
            .collect()
    }

    /// Display offsets `(+v/2, -v/2)` from the uv-plane centre, one per uv point
    pub fn uv_display_offsets(&self) -> Vec<(Vector2<f64>, Vector2<f64>)> {
        self.bins
            .iter()
            .map(|bin| (bin.uv / 2.0, -bin.uv / 2.0))
            .collect()
    }

    pub fn baseline_count(&self) -> usize {
        self.baselines.len()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Largest redundancy, 0 for an empty model
    pub fn max_redundancy(&self) -> usize {
        self.bins.iter().map(|bin| bin.redundancy()).max().unwrap_or(0)
    }

    /// True when every uv point is sampled exactly once
    pub fn is_non_redundant(&self) -> bool {
        self.bins.iter().all(|bin| bin.redundancy() == 1)
    }

    pub fn rounding_digits(&self) -> u32 {
        self.rounding_digits
    }

    /// Revision of the mask these results were computed from
    pub fn mask_revision(&self) -> u64 {
        self.mask_revision
    }

    /// True once `mask` has been mutated after this computation
    pub fn is_stale(&self, mask: &ApertureMask) -> bool {
        mask.revision() != self.mask_revision
    }
}

/// Canonical rounded vector of a baseline, identical for `vector` and `-vector`.
pub fn canonical_uv(vector: Vector2<f64>, rounding_digits: u32) -> Vector2<f64> {
    let rounding_digits = rounding_digits.min(MAX_ROUNDING_DIGITS);
    key_to_vector(canonical_key(vector, rounding_digits), rounding_digits)
}

/// Rounded vector in units of `10^-rounding_digits`, folded to the lexicographically
/// larger of `v` and `-v`. Stays in `f64` so large pitches cannot overflow an integer key.
fn canonical_key(vector: Vector2<f64>, rounding_digits: u32) -> (f64, f64) {
    let scale = 10f64.powi(rounding_digits as i32);
    // Adding 0.0 turns -0.0 into +0.0
    let key = ((vector.x * scale).round() + 0.0, (vector.y * scale).round() + 0.0);
    let negated = (-key.0 + 0.0, -key.1 + 0.0);
    let order = negated.0.total_cmp(&key.0).then(negated.1.total_cmp(&key.1));
    if order.is_gt() { negated } else { key }
}

fn key_bits(key: (f64, f64)) -> (u64, u64) {
    (key.0.to_bits(), key.1.to_bits())
}

fn key_to_vector(key: (f64, f64), rounding_digits: u32) -> Vector2<f64> {
    let scale = 10f64.powi(rounding_digits as i32);
    Vector2::new(key.0 / scale, key.1 / scale)
}
