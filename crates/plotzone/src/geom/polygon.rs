//! Shoelace area and area-weighted centroid of a simple polygon.
//!
//! Both treat the vertex list as an implicitly closed loop regardless of the
//! polygon's `closed` flag.

use nalgebra::Vector2;

use super::types::{BoundaryPolygon, GeomCfg};
use crate::error::{Error, Result};

#[inline]
fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - q.x * p.y
}

/// Doubled signed area `Σ (xᵢ yᵢ₊₁ − xᵢ₊₁ yᵢ)` over the closed loop.
///
/// Positive for counterclockwise order in a y-up frame (clockwise on screen).
pub fn signed_area2(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| cross(points[i], points[(i + 1) % n]))
        .sum()
}

fn require_polygon(polygon: &BoundaryPolygon) -> Result<()> {
    if polygon.has_area_support() {
        Ok(())
    } else {
        Err(Error::InvalidPolygon { got: polygon.len() })
    }
}

/// Shoelace area `0.5·|Σ|` with default tolerances.
pub fn polygon_area(polygon: &BoundaryPolygon) -> Result<f64> {
    polygon_area_cfg(polygon, GeomCfg::default())
}

/// Shoelace area; collinear or zero-area input is `DegeneratePolygon`.
pub fn polygon_area_cfg(polygon: &BoundaryPolygon, cfg: GeomCfg) -> Result<f64> {
    require_polygon(polygon)?;
    let a2 = signed_area2(&polygon.points);
    if a2.abs() < cfg.eps_area {
        return Err(Error::DegeneratePolygon);
    }
    Ok(0.5 * a2.abs())
}

/// Area-weighted centroid with default tolerances.
pub fn compute_centroid(polygon: &BoundaryPolygon) -> Result<Vector2<f64>> {
    compute_centroid_cfg(polygon, GeomCfg::default())
}

/// Area-weighted centroid `C = Σ (pᵢ + pᵢ₊₁)·crossᵢ / (3·Σ crossᵢ)`.
///
/// Uses the signed sum so vertex orientation cancels out.
pub fn compute_centroid_cfg(polygon: &BoundaryPolygon, cfg: GeomCfg) -> Result<Vector2<f64>> {
    require_polygon(polygon)?;
    let pts = &polygon.points;
    let n = pts.len();
    let mut area2 = 0.0;
    let mut acc = Vector2::zeros();
    for i in 0..n {
        let p = pts[i];
        let q = pts[(i + 1) % n];
        let c = cross(p, q);
        area2 += c;
        acc += (p + q) * c;
    }
    if area2.abs() < cfg.eps_area {
        return Err(Error::DegeneratePolygon);
    }
    Ok(acc / (3.0 * area2))
}
