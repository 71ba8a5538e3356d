//! Job files and boundary CSVs.
//!
//! A job is `{ "plot": PlotInput, "config": AnalysisCfg }` with `config`
//! optional. Boundary CSVs carry one vertex per row in `x,y` columns, in
//! source-image pixels; a trailing row repeating the first marks the loop
//! as explicitly closed.

use anyhow::{bail, Context, Result};
use plotzone::analysis::{AnalysisCfg, PlotInput};
use plotzone::api::boundary_from_points;
use plotzone::BoundaryPolygon;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotJob {
    pub plot: PlotInput,
    #[serde(default)]
    pub config: AnalysisCfg,
}

impl PlotJob {
    /// Job for a bare boundary: tilt 0, raster just large enough to hold it.
    pub fn from_boundary(boundary: BoundaryPolygon) -> Self {
        let raster = raster_extent_for(&boundary);
        Self {
            plot: PlotInput::new(boundary, 0.0, raster),
            config: AnalysisCfg::default(),
        }
    }
}

pub fn read_job(path: &Path) -> Result<PlotJob> {
    let bytes = fs::read(path).with_context(|| format!("reading job {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing job {}", path.display()))
}

pub fn read_boundary_csv(path: &Path) -> Result<BoundaryPolygon> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push((x, y)),
            _ => bail!("{}: missing coordinate in data row {}", path.display(), row + 1),
        }
    }
    let boundary = boundary_from_points(&points);
    tracing::info!(
        path = %path.display(),
        points = boundary.len(),
        closed = boundary.closed,
        "boundary_csv"
    );
    Ok(boundary)
}

/// Smallest raster `(W, H)` whose pixel grid covers every vertex.
pub fn raster_extent_for(boundary: &BoundaryPolygon) -> (u32, u32) {
    match boundary.bounds() {
        Some((_, max)) => (
            (max.x.ceil() + 1.0).max(1.0) as u32,
            (max.y.ceil() + 1.0).max(1.0) as u32,
        ),
        None => (1, 1),
    }
}
