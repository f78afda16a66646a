#[cfg(test)]
mod _tests_hex_grid {
    use super::super::hex_grid::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation2, Vector2};
    use std::f64::consts::PI;

    #[test]
    fn test_radius_two_has_nineteen_sites() {
        let sites = hex_grid_coords(2, 1.0);
        assert_eq!(sites.len(), 19);

        // Centred on the origin
        let sum: Vector2<f64> = sites.iter().map(|(_, p)| *p).sum();
        assert!(sum.norm() < 1e-12, "Grid should be centred, sum = {:?}", sum);
        assert!(sites.iter().any(|(index, _)| *index == HexIndex::new(0, 0)));
    }

    #[test]
    fn test_site_count_formula() {
        for radius in 0..8 {
            let expected = (3 * radius * (radius + 1) + 1) as usize;
            assert_eq!(
                hex_grid_coords(radius, 1.0).len(),
                expected,
                "Wrong site count for radius {}",
                radius
            );
        }
        assert!(hex_grid_coords(-1, 1.0).is_empty());
    }

    #[test]
    fn test_generation_order() {
        let sites = hex_grid_coords(2, 1.0);
        // j is the outer loop; the first row j = -2 only admits i in [0, 2]
        assert_eq!(sites[0].0, HexIndex::new(0, -2));
        assert_eq!(sites[1].0, HexIndex::new(1, -2));
        assert_eq!(sites[2].0, HexIndex::new(2, -2));
        assert_eq!(sites[3].0, HexIndex::new(-1, -1));
        assert_eq!(sites[18].0, HexIndex::new(0, 2));
    }

    #[test]
    fn test_hexagonal_clipping_not_rhombus() {
        let sites = hex_grid_coords(3, 1.0);
        assert!(sites.iter().all(|(index, _)| (index.i + index.j).abs() <= 3));
        assert!(!sites.iter().any(|(index, _)| *index == HexIndex::new(3, 3)));
        assert!(sites.iter().any(|(index, _)| *index == HexIndex::new(3, -3)));
    }

    #[test]
    fn test_nearest_neighbour_spacing_equals_pitch() {
        let pitch = 1.4;
        for index in [
            HexIndex::new(1, 0),
            HexIndex::new(0, 1),
            HexIndex::new(-1, 1),
            HexIndex::new(-1, 0),
            HexIndex::new(0, -1),
            HexIndex::new(1, -1),
        ] {
            assert_relative_eq!(index.to_cartesian(pitch).norm(), pitch, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cartesian_closed_form() {
        let p = HexIndex::new(2, 3).to_cartesian(1.0);
        assert_relative_eq!(p.x, 3.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, 3.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_number() {
        assert_eq!(HexIndex::new(0, 0).ring(), 0);
        assert_eq!(HexIndex::new(1, -1).ring(), 1);
        assert_eq!(HexIndex::new(2, 1).ring(), 3);
        assert_eq!(HexIndex::new(-4, 1).ring(), 4);
    }

    #[test]
    fn test_rotation_matches_cartesian_rotation() {
        let rotation = Rotation2::new(PI / 3.0);
        for (index, position) in hex_grid_coords(3, 1.0) {
            let rotated = index.rotated(1).to_cartesian(1.0);
            let expected = rotation * position;
            assert!(
                (rotated - expected).norm() < 1e-9,
                "Rotation of {:?} gave {:?}, expected {:?}",
                index,
                rotated,
                expected
            );
        }
    }

    #[test]
    fn test_rotation_cycles() {
        let index = HexIndex::new(3, -1);
        assert_eq!(index.rotated(6), index);
        assert_eq!(index.rotated(0), index);
        assert_eq!(index.rotated(-1), index.rotated(5));
        assert_eq!(HexIndex::new(1, 0).rotated(1), HexIndex::new(0, 1));
        assert_eq!(index.rotated(1).ring(), index.ring());
    }

    #[test]
    fn test_spider_lines() {
        assert!(HexIndex::new(3, 0).on_spider()); // y = 0
        assert!(HexIndex::new(0, 2).on_spider()); // y = sqrt(3) x
        assert!(HexIndex::new(2, -2).on_spider()); // y = -sqrt(3) x
        assert!(!HexIndex::new(1, 1).on_spider());

        // Cross-check against the Cartesian line equations
        let sqrt3 = 3.0_f64.sqrt();
        for (index, p) in hex_grid_coords(5, 1.0) {
            let on_line = p.y.abs() < 1e-9
                || (p.y - sqrt3 * p.x).abs() < 1e-9
                || (p.y + sqrt3 * p.x).abs() < 1e-9;
            assert_eq!(index.on_spider(), on_line, "Mismatch at {:?}", index);
        }
    }
}
