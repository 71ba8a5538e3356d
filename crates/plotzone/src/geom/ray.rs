//! Ray casting from a center to the boundary loop.
//!
//! Ray `P = o + t·d (t ≥ 0)`, edge `Q = a + u·(b − a) (0 ≤ u ≤ 1)`, solved in
//! 2D cross-product form.

use nalgebra::Vector2;

use super::types::{BoundaryPolygon, GeomCfg};

/// Unit direction for a compass angle in degrees.
///
/// 0° is north (decreasing y) and angles grow clockwise. The angle is
/// reduced modulo 360 here and nowhere else, so `θ` and `θ + 360` map to
/// bit-identical vectors.
#[inline]
pub fn direction(angle_deg: f64) -> Vector2<f64> {
    let rad = angle_deg.rem_euclid(360.0).to_radians();
    Vector2::new(rad.sin(), -rad.cos())
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Nearest boundary hit along the ray, default tolerances.
pub fn intersect_ray(
    polygon: &BoundaryPolygon,
    origin: Vector2<f64>,
    angle_deg: f64,
) -> Option<Vector2<f64>> {
    intersect_ray_cfg(&polygon.points, origin, angle_deg, GeomCfg::default())
}

/// Nearest intersection of the ray with any edge of the closed loop.
///
/// Returns `None` for fewer than 2 points or when every edge is missed.
/// Parallel edges (`|d × s| < eps_det`) are skipped; `u` accepts
/// `[−eps_param, 1 + eps_param]` so rays through a vertex still hit.
pub fn intersect_ray_cfg(
    points: &[Vector2<f64>],
    origin: Vector2<f64>,
    angle_deg: f64,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let d = direction(angle_deg);
    let mut best: Option<(f64, Vector2<f64>)> = None;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let s = b - a;
        let denom = cross(d, s);
        if denom.abs() < cfg.eps_det {
            continue;
        }
        let r = a - origin;
        let t = cross(r, s) / denom;
        let u = cross(r, d) / denom;
        let on_edge = (-cfg.eps_param..=1.0 + cfg.eps_param).contains(&u);
        if t >= 0.0 && on_edge && best.as_ref().is_none_or(|(bt, _)| t < *bt) {
            best = Some((t, origin + d * t));
        }
    }
    best.map(|(_, p)| p)
}
