//! Consolidated analysis payload for report collaborators.
//!
//! One call runs the whole pipeline: center, shoelace areas, zone areas,
//! balance, prakriti and the drawable overlay.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::balance::{classify_balance, BalanceReport, Remark};
use super::prakriti::{aggregate_prakriti, Prakriti, PrakritiReport};
use crate::error::Result;
use crate::geom::{compute_centroid_cfg, polygon_area_cfg, BoundaryPolygon, GeomCfg};
use crate::raster::{compute_zone_areas_cfg, RasterCfg};
use crate::zones::{
    sector_definitions, zone_overlay, OverlayCfg, SectorDef, Zone, ZoneAreas, ZoneOverlay,
    ZONE_COUNT,
};

/// Inputs of one analysis call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotInput {
    /// Boundary used for the center, the plot area and the overlay.
    pub boundary: BoundaryPolygon,
    /// Optional separate boundary for zone areas; used only with ≥3 points.
    #[serde(default)]
    pub area_boundary: Option<BoundaryPolygon>,
    /// Center override; the centroid of `boundary` when absent.
    #[serde(default)]
    pub center: Option<Vector2<f64>>,
    #[serde(default)]
    pub north_tilt: f64,
    pub raster_width: u32,
    pub raster_height: u32,
}

impl PlotInput {
    pub fn new(boundary: BoundaryPolygon, north_tilt: f64, raster: (u32, u32)) -> Self {
        Self {
            boundary,
            area_boundary: None,
            center: None,
            north_tilt,
            raster_width: raster.0,
            raster_height: raster.1,
        }
    }

    /// Boundary used for zone areas: `area_boundary` if it has ≥3 points, else `boundary`.
    pub fn effective_area_boundary(&self) -> &BoundaryPolygon {
        match &self.area_boundary {
            Some(b) if b.has_area_support() => b,
            _ => &self.boundary,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCfg {
    pub geom: GeomCfg,
    pub raster: RasterCfg,
    pub overlay: OverlayCfg,
}

/// One row of the zone table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneRow {
    pub zone: Zone,
    pub area: f64,
    pub remark: Remark,
    pub prakriti: Prakriti,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub center: Vector2<f64>,
    pub north_tilt: f64,
    /// Shoelace area of the center boundary.
    pub plot_area: f64,
    /// Shoelace area of the boundary the zones were measured on.
    pub area_boundary_area: f64,
    /// True when a separate area boundary was used.
    pub separate_area_boundary: bool,
    /// Sum of the zone areas; approximates `area_boundary_area`.
    pub zone_area_sum: f64,
    pub zones: ZoneAreas,
    pub sectors: [SectorDef; ZONE_COUNT],
    pub balance: BalanceReport,
    pub prakriti: PrakritiReport,
    pub overlay: ZoneOverlay,
}

impl AnalysisReport {
    pub fn zone_rows(&self) -> Vec<ZoneRow> {
        self.zones
            .iter()
            .map(|(zone, area)| ZoneRow {
                zone,
                area,
                remark: self.balance.remark(zone),
                prakriti: Prakriti::of(zone),
            })
            .collect()
    }

    /// Relative gap between the raster zone sum and the shoelace area.
    pub fn raster_discrepancy(&self) -> f64 {
        if self.area_boundary_area > 0.0 {
            (self.zone_area_sum - self.area_boundary_area).abs() / self.area_boundary_area
        } else {
            0.0
        }
    }
}

/// Run the full zone analysis.
///
/// Boundary rays of the overlay that miss the polygon extend to twice the
/// larger raster side.
pub fn analyze(input: &PlotInput, cfg: &AnalysisCfg) -> Result<AnalysisReport> {
    let center = match input.center {
        Some(c) => c,
        None => compute_centroid_cfg(&input.boundary, cfg.geom)?,
    };
    let plot_area = polygon_area_cfg(&input.boundary, cfg.geom)?;
    let area_boundary = input.effective_area_boundary();
    let separate_area_boundary = !std::ptr::eq(area_boundary, &input.boundary);
    let area_boundary_area = polygon_area_cfg(area_boundary, cfg.geom)?;

    let zones = compute_zone_areas_cfg(
        area_boundary,
        Some(center),
        input.north_tilt,
        input.raster_width,
        input.raster_height,
        cfg.raster,
    )?;
    let sectors = sector_definitions(input.north_tilt)?;
    let balance = classify_balance(&zones);
    let prakriti = aggregate_prakriti(&zones)?;

    let overlay_cfg = OverlayCfg {
        fallback_radius: 2.0 * input.raster_width.max(input.raster_height) as f64,
        ..cfg.overlay
    };
    let overlay = zone_overlay(&input.boundary, center, input.north_tilt, overlay_cfg)?;

    let report = AnalysisReport {
        center,
        north_tilt: input.north_tilt,
        plot_area,
        area_boundary_area,
        separate_area_boundary,
        zone_area_sum: zones.total(),
        zones,
        sectors,
        balance,
        prakriti,
        overlay,
    };
    tracing::debug!(
        plot_area,
        zone_area_sum = report.zone_area_sum,
        discrepancy = report.raster_discrepancy(),
        label = %report.prakriti.label,
        "analysis complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use nalgebra::vector;

    fn square() -> BoundaryPolygon {
        BoundaryPolygon::from_tuples(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
    }

    #[test]
    fn square_report() {
        let input = PlotInput::new(square(), 0.0, (200, 200));
        let r = analyze(&input, &AnalysisCfg::default()).unwrap();
        assert!((r.center - vector![50.0, 50.0]).norm() < 1e-9);
        assert_eq!(r.plot_area, 10_000.0);
        assert_eq!(r.zone_area_sum, 10_000.0);
        assert!(!r.separate_area_boundary);
        assert!(r.raster_discrepancy() < 1e-12);
        assert!(r.balance.lines.llob <= r.balance.lines.lob);
        assert!(r.balance.lines.lob <= r.balance.lines.ulob);
        // Corner zones (NE, SE, SW, NW) are the largest on a square.
        assert_eq!(r.balance.remark(Zone::NE), Remark::High);
        assert_eq!(r.overlay.boundary_rays.len(), 16);
        let rows = r.zone_rows();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[4].zone, Zone::E);
        assert_eq!(rows[4].prakriti, Prakriti::Fire);
    }

    #[test]
    fn area_boundary_fallback_and_override() {
        let mut input = PlotInput::new(square(), 0.0, (200, 200));
        input.area_boundary = Some(BoundaryPolygon::from_tuples(&[(0.0, 0.0), (1.0, 1.0)]));
        let r = analyze(&input, &AnalysisCfg::default()).unwrap();
        assert!(!r.separate_area_boundary);
        assert_eq!(r.area_boundary_area, 10_000.0);

        input.area_boundary = Some(BoundaryPolygon::from_tuples(&[
            (0.0, 0.0),
            (150.0, 0.0),
            (150.0, 100.0),
            (0.0, 100.0),
        ]));
        input.center = Some(vector![60.0, 40.0]);
        let r = analyze(&input, &AnalysisCfg::default()).unwrap();
        assert!(r.separate_area_boundary);
        assert_eq!(r.center, vector![60.0, 40.0]);
        assert_eq!(r.plot_area, 10_000.0);
        assert_eq!(r.area_boundary_area, 15_000.0);
        assert_eq!(r.zone_area_sum, 15_000.0);
    }

    #[test]
    fn errors_propagate() {
        let input = PlotInput::new(
            BoundaryPolygon::from_tuples(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            0.0,
            (10, 10),
        );
        assert_eq!(
            analyze(&input, &AnalysisCfg::default()),
            Err(Error::DegeneratePolygon)
        );
        let mut bad_tilt = PlotInput::new(square(), f64::NAN, (200, 200));
        bad_tilt.center = Some(vector![50.0, 50.0]);
        assert!(matches!(
            analyze(&bad_tilt, &AnalysisCfg::default()),
            Err(Error::InvalidTilt(_))
        ));
    }

    #[test]
    fn report_serializes() {
        let input = PlotInput::new(square(), 10.0, (120, 120));
        let r = analyze(&input, &AnalysisCfg::default()).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.prakriti.label, r.prakriti.label);
        assert_eq!(back.zones, r.zones);
    }
}
