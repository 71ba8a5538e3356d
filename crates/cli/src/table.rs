//! Zone table export.

use anyhow::{Context, Result};
use plotzone::analysis::AnalysisReport;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// One row per zone in clockwise order from N.
pub fn zone_table(report: &AnalysisReport) -> PolarsResult<DataFrame> {
    let rows = report.zone_rows();
    df!(
        "zone" => rows.iter().map(|r| r.zone.name()).collect::<Vec<_>>(),
        "center_deg" => report.sectors.iter().map(|s| s.center_deg).collect::<Vec<_>>(),
        "low_deg" => report.sectors.iter().map(|s| s.low_deg).collect::<Vec<_>>(),
        "high_deg" => report.sectors.iter().map(|s| s.high_deg).collect::<Vec<_>>(),
        "area" => rows.iter().map(|r| r.area).collect::<Vec<_>>(),
        "remark" => rows.iter().map(|r| r.remark.to_string()).collect::<Vec<_>>(),
        "prakriti" => rows.iter().map(|r| r.prakriti.name()).collect::<Vec<_>>()
    )
}

/// Write the zone table; `.parquet` paths get Parquet, everything else CSV.
pub fn write_zone_table(path: &Path, report: &AnalysisReport) -> Result<()> {
    let mut df = zone_table(report)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
        _ => CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?,
    }
    tracing::info!(path = %path.display(), rows = df.height(), "zone_table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotzone::analysis::{analyze, AnalysisCfg, PlotInput};
    use plotzone::BoundaryPolygon;
    use tempfile::tempdir;

    fn square_report() -> AnalysisReport {
        let sq = BoundaryPolygon::from_tuples(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
        ]);
        analyze(&PlotInput::new(sq, 0.0, (120, 120)), &AnalysisCfg::default()).unwrap()
    }

    #[test]
    fn table_has_a_row_per_zone() {
        let df = zone_table(&square_report()).unwrap();
        assert_eq!(df.shape(), (16, 7));
        let total: f64 = df.column("area").unwrap().f64().unwrap().sum().unwrap();
        assert_eq!(total, 10_000.0);
    }

    #[test]
    fn csv_and_parquet_outputs() {
        let dir = tempdir().unwrap();
        let report = square_report();

        let csv = dir.path().join("out/zones.csv");
        write_zone_table(&csv, &report).unwrap();
        let text = fs::read_to_string(&csv).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("zone,center_deg,low_deg,high_deg,area,remark,prakriti")
        );
        assert!(lines.next().is_some_and(|l| l.starts_with("N,")));
        assert_eq!(text.lines().count(), 17);

        let pq = dir.path().join("zones.parquet");
        write_zone_table(&pq, &report).unwrap();
        assert!(fs::metadata(&pq).unwrap().len() > 0);
    }
}
