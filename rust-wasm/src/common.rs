use hexmask::baselines::BaselineModel;
use hexmask::editor::LoadSummary;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Point structure for JavaScript interop
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// One hole pair and its baseline vector
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PairData {
    pub i: usize,
    pub j: usize,
    pub vector: Point,
}

/// Baseline results handed to the plotting side
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BaselineData {
    /// One canonical vector per distinct uv point
    pub uv: Vec<Point>,
    /// Parallel to `uv`
    pub redundancy: Vec<usize>,
    pub pairs: Vec<PairData>,
    /// Parallel to `pairs`: redundancy of the bin each pair falls in
    pub pair_redundancy: Vec<usize>,
}

impl From<&BaselineModel> for BaselineData {
    fn from(model: &BaselineModel) -> Self {
        BaselineData {
            uv: model.uv_points().into_iter().map(Point::from).collect(),
            redundancy: model.redundancy(),
            pairs: model
                .baselines()
                .iter()
                .map(|b| PairData {
                    i: b.i,
                    j: b.j,
                    vector: b.vector.into(),
                })
                .collect(),
            pair_redundancy: model.pair_redundancy(),
        }
    }
}

/// Result of loading mask text, so the page can flag masks that did not fit the aperture
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct LoadData {
    pub holes: usize,
    pub max_shift: f64,
    pub off_lattice: bool,
}

impl From<LoadSummary> for LoadData {
    fn from(summary: LoadSummary) -> Self {
        LoadData {
            holes: summary.holes,
            max_shift: summary.max_shift,
            off_lattice: summary.off_lattice,
        }
    }
}
