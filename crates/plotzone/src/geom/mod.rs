//! Planar geometry of the plot boundary.
//!
//! Purpose
//! - Shoelace area and area-weighted centroid of the boundary loop.
//! - Nearest ray/boundary intersection, shared by overlay rendering and the
//!   zone partition.
//! - Reproducible synthetic boundaries for tests and benches.
//!
//! All routines take immutable inputs and use the explicit tolerances in
//! `GeomCfg`; the `*_cfg` variants let callers override them.

mod polygon;
pub mod rand;
mod ray;
mod types;
mod util;

pub use polygon::{
    compute_centroid, compute_centroid_cfg, polygon_area, polygon_area_cfg, signed_area2,
};
pub use ray::{direction, intersect_ray, intersect_ray_cfg};
pub use types::{BoundaryPolygon, GeomCfg};
pub use util::{convex_hull, is_convex};
