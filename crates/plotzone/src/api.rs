//! Flat interface for UI, boundary-detection and report collaborators.
//!
//! Collaborators hand in already-normalized inputs (ordered points, a center,
//! a tilt, the raster extent) and get values or typed errors back. Boundaries
//! from manual clicks and from contour extraction both arrive as
//! `BoundaryPolygon`.

pub use crate::analysis::{
    aggregate_prakriti, analyze, classify_balance, classify_balance_slice, AnalysisCfg,
    AnalysisReport, BalanceLines, BalanceReport, PlotInput, Prakriti, PrakritiReport, Remark,
};
pub use crate::error::{Error, Result};
pub use crate::geom::{compute_centroid, intersect_ray, polygon_area, BoundaryPolygon, GeomCfg};
pub use crate::raster::{compute_zone_areas, RasterCfg};
pub use crate::zones::{
    cardinal_directions, sector_definitions, zone_overlay, Cardinal, OverlayCfg, SectorDef, Zone,
    ZoneAreas, ZoneOverlay,
};

use nalgebra::Vector2;

/// Boundary from raw `(x, y)` pairs, e.g. a contour or a click list.
///
/// Consecutive duplicates are dropped, as is a trailing point that repeats
/// the first one (contour tools often emit the loop explicitly closed).
pub fn boundary_from_points(points: &[(f64, f64)]) -> BoundaryPolygon {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Vector2::new(x, y);
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    let mut closed = false;
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
        closed = true;
    }
    BoundaryPolygon {
        points: out,
        closed,
    }
}

/// Zone areas from a center boundary alone, deriving the center.
pub fn zone_areas_from_centroid(
    polygon: &BoundaryPolygon,
    north_tilt: f64,
    width: u32,
    height: u32,
) -> Result<ZoneAreas> {
    let center = compute_centroid(polygon)?;
    compute_zone_areas(polygon, Some(center), north_tilt, width, height)
}
