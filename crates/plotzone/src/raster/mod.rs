//! Raster zone-area engine.
//!
//! Purpose
//! - Measure each zone's share of the area boundary as the pixel count of
//!   `polygon mask AND wedge mask`.
//!
//! Model
//! - The polygon is filled once over the `W × H` raster.
//! - Each zone's wedge is the triangle `(c, c + R·d(low), c + R·d(high))`
//!   with `R = radius_factor · hypot(W, H)`. The far edge of the triangle
//!   sits at `R·cos(11.25°)` from the center, so the factor is raised to at
//!   least `1 / cos(11.25°)` to keep every raster pixel inside its wedge.
//! - Adjacent wedges share an edge and the fill rule assigns each pixel to
//!   exactly one of them, so the zone sum equals the polygon's pixel count.
//!   That count approximates the shoelace area; callers get both.
//! - Zones are independent; with the `parallel` feature they run on rayon
//!   over a read-only polygon mask.

mod fill;
mod mask;

pub use fill::{fill_into, fill_polygon};
pub use mask::Mask;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::geom::{direction, BoundaryPolygon};
use crate::zones::{sector_definitions, SectorDef, ZoneAreas, ZONE_STEP_DEG};

/// Raster engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RasterCfg {
    /// Wedge radius as a multiple of the raster diagonal.
    pub radius_factor: f64,
}

impl RasterCfg {
    /// Smallest factor whose wedges reach every raster corner, plus a small margin.
    pub fn min_radius_factor() -> f64 {
        1.001 / (ZONE_STEP_DEG / 2.0).to_radians().cos()
    }
}

impl Default for RasterCfg {
    fn default() -> Self {
        Self { radius_factor: 2.0 }
    }
}

/// Per-zone areas (pixel counts) with default configuration.
pub fn compute_zone_areas(
    polygon: &BoundaryPolygon,
    center: Option<Vector2<f64>>,
    tilt: f64,
    width: u32,
    height: u32,
) -> Result<ZoneAreas> {
    compute_zone_areas_cfg(polygon, center, tilt, width, height, RasterCfg::default())
}

/// Per-zone areas (pixel counts) of `polygon` seen from `center`.
///
/// Errors
/// - `InsufficientGeometry` for a missing or non-finite center, fewer than 3
///   points, non-finite vertices or an empty raster.
/// - `InvalidTilt` for a non-finite tilt.
pub fn compute_zone_areas_cfg(
    polygon: &BoundaryPolygon,
    center: Option<Vector2<f64>>,
    tilt: f64,
    width: u32,
    height: u32,
    cfg: RasterCfg,
) -> Result<ZoneAreas> {
    let center = center.ok_or(Error::InsufficientGeometry("center is not set"))?;
    if !(center.x.is_finite() && center.y.is_finite()) {
        return Err(Error::InsufficientGeometry("center is not finite"));
    }
    if !polygon.has_area_support() {
        return Err(Error::InsufficientGeometry(
            "area boundary needs at least 3 points",
        ));
    }
    if polygon.points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(Error::InsufficientGeometry("boundary has non-finite points"));
    }
    if width == 0 || height == 0 {
        return Err(Error::InsufficientGeometry("raster extent is empty"));
    }
    let defs = sector_definitions(tilt)?;

    let started = Instant::now();
    let (w, h) = (width as usize, height as usize);
    let poly_mask = fill_polygon(w, h, &polygon.points);
    let factor = cfg.radius_factor.max(RasterCfg::min_radius_factor());
    let radius = factor * (w as f64).hypot(h as f64);
    tracing::debug!(
        width,
        height,
        radius,
        polygon_pixels = poly_mask.count(),
        "zone raster prepared"
    );

    let wedge_area =
        |d: &SectorDef| -> f64 { zone_pixels(&poly_mask, center, radius, d) as f64 };

    #[cfg(feature = "parallel")]
    let areas: Vec<f64> = {
        use rayon::prelude::*;
        defs.par_iter().map(wedge_area).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let areas: Vec<f64> = defs.iter().map(wedge_area).collect();

    let out = ZoneAreas::from_slice(&areas)?;
    tracing::debug!(
        total = out.total(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "zone areas computed"
    );
    Ok(out)
}

/// Pixels of `poly_mask` inside the wedge of one sector.
fn zone_pixels(poly_mask: &Mask, center: Vector2<f64>, radius: f64, def: &SectorDef) -> usize {
    let tri = [
        center,
        center + direction(def.low_deg) * radius,
        center + direction(def.high_deg) * radius,
    ];
    let wedge = fill_polygon(poly_mask.width, poly_mask.height, &tri);
    poly_mask.and_count(&wedge)
}
