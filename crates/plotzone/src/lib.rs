//! Zone geometry and area analysis for annotated site plots.
//!
//! A caller supplies a boundary polygon in source-image pixel space, a center
//! (or lets the engine derive the centroid) and a north tilt. The engine
//! partitions the plot into 16 directional zones, measures each zone's area
//! against a raster mask and derives the balance and prakriti classifications.
//!
//! Conventions
//! - Points are `Vec2` (`nalgebra::Vector2<f64>`), x to the right, y down.
//! - Angles are degrees, clockwise positive, 0° pointing to decreasing y.
//! - Every function is pure over immutable inputs; nothing is cached.
//!
//! Layout
//! - `geom`: polygon area/centroid, ray casting, synthetic boundaries.
//! - `zones`: the 16 sectors, cardinal rays, overlay geometry.
//! - `raster`: masks and the per-zone area engine.
//! - `analysis`: balance lines, prakriti grouping, consolidated report.
//! - `api`: flat surface for UI/report collaborators.

pub mod analysis;
pub mod api;
pub mod error;
pub mod geom;
pub mod raster;
pub mod zones;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom::{BoundaryPolygon, GeomCfg};
pub use nalgebra::Vector2 as Vec2;
pub use zones::{Zone, ZoneAreas};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        aggregate_prakriti, analyze, classify_balance, AnalysisCfg, AnalysisReport,
        BalanceLines, BalanceReport, PlotInput, Prakriti, PrakritiReport, Remark,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geom::{
        compute_centroid, intersect_ray, polygon_area, BoundaryPolygon, GeomCfg,
    };
    pub use crate::raster::{compute_zone_areas, RasterCfg};
    pub use crate::zones::{sector_definitions, Cardinal, SectorDef, Zone, ZoneAreas};
    pub use nalgebra::Vector2 as Vec2;
}
