//! Boundary polygon and numeric tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for determinant, edge-parameter and area checks.
//! - `BoundaryPolygon`: ordered vertex list in source-image pixel space.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Ray/edge determinant below which the pair is treated as parallel.
    pub eps_det: f64,
    /// Slack on the edge parameter `u ∈ [0, 1]` so that vertices are hit.
    pub eps_param: f64,
    /// Doubled signed area below which a polygon is degenerate.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-9,
            eps_param: 1e-9,
            eps_area: 1e-9,
        }
    }
}

/// Ordered boundary of a plot.
///
/// Invariants:
/// - Insertion order defines the edges `i → i+1`.
/// - `closed` only affects how collaborators draw the last edge; area,
///   centroid, ray casting and rasterization always treat the loop as closed.
/// - Self-intersecting or multi-component boundaries are unsupported.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    pub points: Vec<Vector2<f64>>,
    #[serde(default)]
    pub closed: bool,
}

impl BoundaryPolygon {
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    #[inline]
    pub fn closed(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub fn from_tuples(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least three vertices, the minimum for area, centroid and rasterization.
    #[inline]
    pub fn has_area_support(&self) -> bool {
        self.points.len() >= 3
    }

    /// Closed-loop edges `(a, b)`, including `n-1 → 0`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Axis-aligned bounds `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl From<Vec<Vector2<f64>>> for BoundaryPolygon {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        Self::new(points)
    }
}
