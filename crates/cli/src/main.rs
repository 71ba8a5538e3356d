mod job;
mod provenance;
mod table;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use plotzone::analysis::{analyze, AnalysisReport, PlotInput};
use plotzone::geom::rand::{draw_boundary_radial, RadialCfg, ReplayToken, VertexCount};
use plotzone::zones::{cardinal_directions, sector_definitions};
use plotzone::Vec2;

use job::PlotJob;
use provenance::Payload;

/// Relative raster-vs-shoelace gap above which the report is flagged.
const DISCREPANCY_WARN: f64 = 0.01;

#[derive(Parser)]
#[command(name = "plotzone")]
#[command(about = "Zone areas, balance and prakriti for annotated site plots")]
struct Cmd {
    /// Emit debug events from the zone engine
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze one plot and write the JSON report
    Analyze(AnalyzeArgs),
    /// Print the 16 sector definitions and cardinal rays for a tilt
    Sectors {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        tilt: f64,
    },
    /// Analyze a synthetic boundary drawn from a replay token
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        tilt: f64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// JSON job file: `{"plot": PlotInput, "config": AnalysisCfg}`
    #[arg(long, required_unless_present = "boundary_csv")]
    input: Option<PathBuf>,
    /// Boundary points as CSV with `x,y` columns; replaces the job boundary
    #[arg(long)]
    boundary_csv: Option<PathBuf>,
    /// Separate area boundary as CSV with `x,y` columns
    #[arg(long)]
    area_csv: Option<PathBuf>,
    /// North tilt in degrees, clockwise
    #[arg(long, allow_negative_numbers = true)]
    tilt: Option<f64>,
    /// Center override in pixels
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    center: Option<Vec<f64>>,
    /// Raster extent in pixels
    #[arg(long, num_args = 2, value_names = ["W", "H"])]
    raster: Option<Vec<u32>>,
    /// JSON report path
    #[arg(long)]
    out: PathBuf,
    /// Zone table path; `.parquet` writes Parquet, anything else CSV
    #[arg(long)]
    table: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .init();
    match cmd.action {
        Action::Analyze(args) => run_analyze(args),
        Action::Sectors { tilt } => sectors(tilt),
        Action::Demo {
            seed,
            index,
            vertices,
            tilt,
            out,
            table,
        } => demo(ReplayToken { seed, index }, vertices, tilt, out, table),
        Action::Report => report(),
    }
}

fn load_job(args: &AnalyzeArgs) -> Result<PlotJob> {
    let boundary = args
        .boundary_csv
        .as_deref()
        .map(job::read_boundary_csv)
        .transpose()?;
    let mut job = match (&args.input, boundary) {
        (Some(path), boundary) => {
            let mut job = job::read_job(path)?;
            if let Some(b) = boundary {
                job.plot.boundary = b;
            }
            job
        }
        (None, Some(b)) => PlotJob::from_boundary(b),
        (None, None) => bail!("either --input or --boundary-csv is required"),
    };
    if let Some(path) = &args.area_csv {
        job.plot.area_boundary = Some(job::read_boundary_csv(path)?);
    }
    if let Some(tilt) = args.tilt {
        job.plot.north_tilt = tilt;
    }
    if let Some(&[x, y]) = args.center.as_deref() {
        job.plot.center = Some(Vec2::new(x, y));
    }
    if let Some(&[w, h]) = args.raster.as_deref() {
        job.plot.raster_width = w;
        job.plot.raster_height = h;
    }
    Ok(job)
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let job = load_job(&args)?;
    tracing::info!(
        points = job.plot.boundary.len(),
        north_tilt = job.plot.north_tilt,
        raster = ?(job.plot.raster_width, job.plot.raster_height),
        "analyze"
    );
    let report = analyze(&job.plot, &job.config).context("zone analysis failed")?;

    let inputs: Vec<PathBuf> = [&args.input, &args.boundary_csv, &args.area_csv]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let params = json!({
        "north_tilt": job.plot.north_tilt,
        "center": job.plot.center.map(|c| [c.x, c.y]),
        "raster": [job.plot.raster_width, job.plot.raster_height],
        "config": job.config,
    });
    write_outputs(&report, &args.out, args.table.as_deref(), params, inputs)
}

fn demo(
    tok: ReplayToken,
    vertices: usize,
    tilt: f64,
    out: PathBuf,
    table: Option<PathBuf>,
) -> Result<()> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let boundary = draw_boundary_radial(cfg, tok);
    let input = PlotInput::new(boundary, tilt, cfg.raster_extent());
    tracing::info!(seed = tok.seed, index = tok.index, vertices, tilt, "demo");
    let report = analyze(&input, &Default::default()).context("demo analysis failed")?;
    let params = json!({
        "seed": tok.seed,
        "index": tok.index,
        "vertices": vertices,
        "north_tilt": tilt,
        "raster": [input.raster_width, input.raster_height],
    });
    write_outputs(&report, &out, table.as_deref(), params, Vec::new())
}

fn write_outputs(
    report: &AnalysisReport,
    out: &Path,
    table: Option<&Path>,
    params: serde_json::Value,
    inputs: Vec<PathBuf>,
) -> Result<()> {
    let discrepancy = report.raster_discrepancy();
    if discrepancy > DISCREPANCY_WARN {
        tracing::warn!(
            discrepancy,
            zone_area_sum = report.zone_area_sum,
            area = report.area_boundary_area,
            "raster zone sum deviates from shoelace area; raise the raster resolution"
        );
    }
    tracing::info!(
        label = %report.prakriti.label,
        lob = report.balance.lines.lob,
        plot_area = report.plot_area,
        "report"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut payload = Payload::new(params).with_inputs(inputs);
    if let Some(path) = table {
        table::write_zone_table(path, report)?;
        payload.extra_outputs.push(path.to_path_buf());
    }
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn sectors(tilt: f64) -> Result<()> {
    let doc = json!({
        "north_tilt": tilt,
        "sectors": sector_definitions(tilt)?,
        "cardinals": cardinal_directions(tilt)?,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}
