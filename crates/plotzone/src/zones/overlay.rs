//! Overlay geometry for rendering collaborators.
//!
//! Produces everything a canvas or export image needs to draw the zone wheel,
//! in source-image pixel space: the 16 boundary rays clipped to the plot, a
//! label anchor per zone and the four cardinal rays.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{cardinal_directions, sector_definitions, Cardinal, Zone, ZONE_COUNT};
use crate::error::{Error, Result};
use crate::geom::{direction, intersect_ray_cfg, BoundaryPolygon, GeomCfg};

/// Line segment `from → to` in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
}

impl Segment {
    /// Point at fraction `f` of the way from `from` to `to`.
    #[inline]
    pub fn at(&self, f: f64) -> Vector2<f64> {
        self.from + (self.to - self.from) * f
    }
}

/// Overlay placement knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayCfg {
    /// Length of a boundary ray that misses the polygon.
    pub fallback_radius: f64,
    /// Zone label position as a fraction of the center→boundary distance.
    pub label_fraction: f64,
    /// Cardinal label position as a fraction of the center→boundary distance.
    pub cardinal_label_fraction: f64,
    pub geom: GeomCfg,
}

impl Default for OverlayCfg {
    fn default() -> Self {
        Self {
            fallback_radius: 2000.0,
            label_fraction: 0.62,
            cardinal_label_fraction: 0.9,
            geom: GeomCfg::default(),
        }
    }
}

/// Drawable zone wheel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneOverlay {
    /// One ray per sector boundary angle, `low_deg` of each zone in order.
    pub boundary_rays: Vec<Segment>,
    /// Label anchors at each zone's center angle; zones whose ray misses are left out.
    pub labels: Vec<(Zone, Vector2<f64>)>,
    /// Cardinal rays clipped to the boundary; rays that miss are left out.
    pub cardinal_rays: Vec<(Cardinal, Segment)>,
    /// Cardinal label anchors along `cardinal_rays`.
    pub cardinal_labels: Vec<(Cardinal, Vector2<f64>)>,
}

/// Build the overlay for a boundary, center and tilt.
///
/// Boundary rays that miss the polygon extend to `fallback_radius` so the
/// wheel stays complete for off-center or open boundaries.
pub fn zone_overlay(
    boundary: &BoundaryPolygon,
    center: Vector2<f64>,
    tilt: f64,
    cfg: OverlayCfg,
) -> Result<ZoneOverlay> {
    if boundary.len() < 2 {
        return Err(Error::InsufficientGeometry(
            "overlay needs at least 2 boundary points",
        ));
    }
    let defs = sector_definitions(tilt)?;
    let hit = |angle: f64| intersect_ray_cfg(&boundary.points, center, angle, cfg.geom);

    let boundary_rays = defs
        .iter()
        .map(|d| {
            let to = hit(d.low_deg)
                .unwrap_or_else(|| center + direction(d.low_deg) * cfg.fallback_radius);
            Segment { from: center, to }
        })
        .collect();

    let mut labels = Vec::with_capacity(ZONE_COUNT);
    for d in &defs {
        if let Some(to) = hit(d.center_deg) {
            let seg = Segment { from: center, to };
            labels.push((d.zone, seg.at(cfg.label_fraction)));
        }
    }

    let mut cardinal_rays = Vec::with_capacity(4);
    let mut cardinal_labels = Vec::with_capacity(4);
    for (card, angle) in cardinal_directions(tilt)? {
        if let Some(to) = hit(angle) {
            let seg = Segment { from: center, to };
            cardinal_rays.push((card, seg));
            cardinal_labels.push((card, seg.at(cfg.cardinal_label_fraction)));
        }
    }

    Ok(ZoneOverlay {
        boundary_rays,
        labels,
        cardinal_rays,
        cardinal_labels,
    })
}
