use nalgebra::Vector2;

/// Index of the point closest to `candidate` (Euclidean distance).
///
/// Ties go to the first point encountered. Returns `None` for an empty slice or a
/// candidate with non-finite coordinates.
pub fn nearest_point_index(points: &[Vector2<f64>], candidate: Vector2<f64>) -> Option<usize> {
    if !candidate.x.is_finite() || !candidate.y.is_finite() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, point) in points.iter().enumerate() {
        let dist_sq = (point - candidate).norm_squared();
        match best {
            Some((_, best_dist_sq)) if dist_sq >= best_dist_sq => {}
            _ => best = Some((idx, dist_sq)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Distance from `candidate` to its nearest point, `None` when there is none.
pub fn distance_to_nearest(points: &[Vector2<f64>], candidate: Vector2<f64>) -> Option<f64> {
    nearest_point_index(points, candidate).map(|idx| (points[idx] - candidate).norm())
}
