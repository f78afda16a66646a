#[cfg(test)]
mod _tests_baseline_model {
    use super::super::baseline_model::*;
    use crate::config::{ApertureConfig, MAX_ROUNDING_DIGITS};
    use crate::lattice::{Aperture, HexIndex, elt_aperture};
    use crate::mask::ApertureMask;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn site(i: i32, j: i32) -> Vector2<f64> {
        HexIndex::new(i, j).to_cartesian(1.0)
    }

    fn mask_of(aperture: &Aperture, sites: &[(i32, i32)]) -> ApertureMask {
        let mut mask = ApertureMask::new();
        for &(i, j) in sites {
            mask.add_hole(aperture, site(i, j)).unwrap();
        }
        mask
    }

    fn sorted_bins(model: &BaselineModel) -> Vec<((i64, i64), usize)> {
        let mut bins: Vec<_> = model
            .bins()
            .iter()
            .map(|bin| {
                (
                    ((bin.uv.x * 1e3).round() as i64, (bin.uv.y * 1e3).round() as i64),
                    bin.redundancy(),
                )
            })
            .collect();
        bins.sort();
        bins
    }

    // ==================== Degenerate masks ====================

    #[test]
    fn test_empty_mask_has_no_baselines() {
        let model = BaselineModel::compute(&ApertureMask::new(), 3);
        assert!(model.is_empty());
        assert_eq!(model.baseline_count(), 0);
        assert_eq!(model.bin_count(), 0);
        assert!(model.uv_points().is_empty());
        assert!(model.redundancy().is_empty());
        assert!(model.pair_redundancy().is_empty());
        assert_eq!(model.max_redundancy(), 0);
    }

    #[test]
    fn test_single_hole_has_no_baselines() {
        let model = BaselineModel::compute_from_holes(&[site(1, 1)], 3, 0);
        assert_eq!(model.baseline_count(), 0);
        assert_eq!(model.bin_count(), 0);
    }

    // ==================== Counting & grouping ====================

    #[test]
    fn test_three_collinear_holes() {
        let aperture = Aperture::from_config(ApertureConfig::full_hexagon(2, 1.0)).unwrap();
        assert_eq!(aperture.len(), 19);
        let mask = mask_of(&aperture, &[(-1, 0), (0, 0), (1, 0)]);

        let model = BaselineModel::compute(&mask, 1);
        assert_eq!(model.baseline_count(), 3);
        assert_eq!(model.bin_count(), 2);
        assert_eq!(model.redundancy(), vec![2, 1]);
        assert_eq!(model.pair_redundancy(), vec![2, 1, 2]);
        assert_eq!(model.pair_bins(), &[0, 1, 0]);
        assert_eq!(model.uv_points(), vec![Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)]);
        assert!(!model.is_non_redundant());
        assert_eq!(model.max_redundancy(), 2);
    }

    #[test]
    fn test_baseline_count_formula() {
        let aperture = elt_aperture(1.0).unwrap();
        let mut mask = ApertureMask::new();
        for nh in 0..12usize {
            let model = BaselineModel::compute(&mask, 1);
            assert_eq!(model.baseline_count(), nh * nh.saturating_sub(1) / 2);
            let total: usize = model.redundancy().iter().sum();
            assert_eq!(total, model.baseline_count(), "Every pair sits in exactly one bin");

            let p = aperture.points()[(nh * 61) % aperture.len()];
            mask.add_hole(&aperture, p);
        }
    }

    #[test]
    fn test_pair_order_and_vectors() {
        let holes = [site(0, 0), site(2, 1), site(-1, 3)];
        let model = BaselineModel::compute_from_holes(&holes, 3, 0);
        let pairs: Vec<(usize, usize)> = model.baselines().iter().map(|b| (b.i, b.j)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(model.baselines()[2].vector, holes[2] - holes[1]);
    }

    #[test]
    fn test_sign_folding_merges_opposite_vectors() {
        let holes = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        let model = BaselineModel::compute_from_holes(&holes, 3, 0);

        assert_eq!(model.baseline_count(), 6);
        assert_eq!(
            sorted_bins(&model),
            vec![((1000, 0), 3), ((2000, 0), 2), ((3000, 0), 1)]
        );
        // (2, 3) points the other way but joins the bin of (0, 1)
        assert_eq!(model.pair_bins()[5], model.pair_bins()[0]);
    }

    #[test]
    fn test_canonical_sign_convention() {
        assert_eq!(canonical_uv(Vector2::new(-1.0, 0.5), 3), Vector2::new(1.0, -0.5));
        assert_eq!(canonical_uv(Vector2::new(1.0, -0.5), 3), Vector2::new(1.0, -0.5));
        assert_eq!(canonical_uv(Vector2::new(0.0, -2.0), 3), Vector2::new(0.0, 2.0));
        assert_eq!(canonical_uv(Vector2::new(0.0, 0.0), 3), Vector2::new(0.0, 0.0));

        let aperture = elt_aperture(1.0).unwrap();
        for p in aperture.points().iter().step_by(17) {
            let q = aperture.points()[100];
            assert_eq!(canonical_uv(p - q, 3), canonical_uv(q - p, 3));
        }
    }

    #[test]
    fn test_grouping_is_order_independent() {
        let aperture = elt_aperture(1.0).unwrap();
        let sites = [(5, 1), (6, 1), (7, 1), (5, 3), (-6, 2), (-5, -3), (8, -2)];
        let forward = mask_of(&aperture, &sites);
        let reversed: Vec<_> = sites.iter().rev().copied().collect();
        let backward = mask_of(&aperture, &reversed);

        let a = BaselineModel::compute(&forward, 3);
        let b = BaselineModel::compute(&backward, 3);
        assert_eq!(sorted_bins(&a), sorted_bins(&b));
    }

    #[test]
    fn test_adjacent_triangle_is_non_redundant() {
        let aperture = elt_aperture(1.0).unwrap();
        let mask = mask_of(&aperture, &[(5, 1), (6, 1), (5, 2)]);
        let model = BaselineModel::compute(&mask, 3);
        assert_eq!(model.bin_count(), 3);
        assert!(model.is_non_redundant());
        assert_eq!(model.max_redundancy(), 1);
    }

    #[test]
    fn test_duplicate_holes_give_zero_baseline() {
        let aperture = elt_aperture(1.0).unwrap();
        let mask = mask_of(&aperture, &[(5, 1), (5, 1)]);
        let model = BaselineModel::compute(&mask, 3);
        assert_eq!(model.baseline_count(), 1);
        assert_eq!(model.uv_points(), vec![Vector2::new(0.0, 0.0)]);
    }

    // ==================== Rounding ====================

    #[test]
    fn test_rounding_controls_merging() {
        let holes = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.00004, 0.0),
            Vector2::new(2.0, 0.0),
        ];

        let coarse = BaselineModel::compute_from_holes(&holes, 3, 0);
        assert_eq!(coarse.redundancy(), vec![2, 1]);

        let fine = BaselineModel::compute_from_holes(&holes, 6, 0);
        assert_eq!(fine.bin_count(), 3);
        assert!(fine.is_non_redundant());
    }

    #[test]
    fn test_uv_points_are_rounded() {
        let holes = [Vector2::new(0.0, 0.0), site(1, 1)];
        let model = BaselineModel::compute_from_holes(&holes, 1, 0);
        let uv = model.uv_points()[0];
        assert_relative_eq!(uv.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(uv.y, 0.9, epsilon = 1e-12);
        // The raw pair vector is kept unrounded
        assert_relative_eq!(model.baselines()[0].vector.y, 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rounding_digits_are_clamped() {
        let model = BaselineModel::compute_from_holes(&[site(0, 0), site(1, 0)], 40, 0);
        assert_eq!(model.rounding_digits(), MAX_ROUNDING_DIGITS);
        assert_eq!(model.uv_points(), vec![Vector2::new(1.0, 0.0)]);
    }

    #[test]
    fn test_large_coordinates_at_full_precision() {
        let holes = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1e7, 0.0),
            Vector2::new(2e7, 5.0),
        ];
        let model = BaselineModel::compute_from_holes(&holes, MAX_ROUNDING_DIGITS, 0);

        // Three different vectors stay in three bins
        assert_eq!(model.redundancy(), vec![1, 1, 1]);
        let uv = model.uv_points();
        assert_relative_eq!(uv[0].x, 1e7, max_relative = 1e-12);
        assert_relative_eq!(uv[1].x, 2e7, max_relative = 1e-12);
        assert_relative_eq!(uv[1].y, 5.0, max_relative = 1e-9);
        assert_relative_eq!(uv[2].x, 1e7, max_relative = 1e-12);
        assert_relative_eq!(uv[2].y, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_opposite_huge_vectors_share_a_bin() {
        let holes = [
            Vector2::new(-1.2e13, 3e6),
            Vector2::new(1.2e13, 3e6),
            Vector2::new(3.6e13, 3e6),
        ];
        let model = BaselineModel::compute_from_holes(&holes, MAX_ROUNDING_DIGITS, 0);
        assert_eq!(model.bin_count(), 2);
        assert_eq!(model.redundancy(), vec![2, 1]);
        assert!(model.uv_points()[0].x > 0.0);
    }

    #[test]
    fn test_negative_zero_components_fold_together() {
        let a = canonical_uv(Vector2::new(-0.0, 2.0), 3);
        let b = canonical_uv(Vector2::new(0.0, -2.0), 3);
        assert_eq!(a, b);
        assert_eq!(a.x.to_bits(), 0.0_f64.to_bits());
    }

    // ==================== Views ====================

    #[test]
    fn test_filter_non_redundant() {
        let holes = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        let model = BaselineModel::compute_from_holes(&holes, 3, 7);
        let filtered = model.filter_non_redundant();

        assert_eq!(filtered.baseline_count(), 1);
        assert_eq!((filtered.baselines()[0].i, filtered.baselines()[0].j), (0, 2));
        assert_eq!(filtered.uv_points(), vec![Vector2::new(3.0, 0.0)]);
        assert_eq!(filtered.pair_bins(), &[0]);
        assert!(filtered.is_non_redundant());
        assert_eq!(filtered.mask_revision(), 7);
        assert_eq!(filtered.rounding_digits(), 3);
    }

    #[test]
    fn test_uv_display_offsets() {
        let holes = [Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0)];
        let model = BaselineModel::compute_from_holes(&holes, 3, 0);
        let (plus, minus) = model.uv_display_offsets()[0];
        assert_eq!(plus, Vector2::new(1.0, 0.5));
        assert_eq!(minus, Vector2::new(-1.0, -0.5));
    }

    #[test]
    fn test_staleness_tracks_mask_revision() {
        let aperture = elt_aperture(1.0).unwrap();
        let mut mask = mask_of(&aperture, &[(5, 1), (6, 1)]);
        let model = BaselineModel::compute(&mask, 1);
        assert!(!model.is_stale(&mask));

        mask.add_hole(&aperture, site(5, 2));
        assert!(model.is_stale(&mask));

        // A failed edit leaves the result fresh
        let model = BaselineModel::compute(&mask, 1);
        mask.remove_hole(42);
        assert!(!model.is_stale(&mask));
    }
}
