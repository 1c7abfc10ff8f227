use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use log::info;
use netgrow_core::rng::RngHandle;
use netgrow_core::{GrowthStatistics, RunProvenance};
use netgrow_graph::{grow_batch, BatchOutcome, GrowthPlan, NetworkSummary};
use netgrow_plot::{figure_file_name, render_growth_figure, FigureConfig};
use serde::Serialize;

/// Substream reserved for plot style selection.
const STYLE_SUBSTREAM: u64 = u64::MAX;

#[derive(Args, Debug)]
pub struct GrowArgs {
    /// YAML growth plan; flags below override its values.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Initial node count of a network to grow (repeatable).
    #[arg(long = "m0", value_name = "NODES")]
    pub m0: Vec<usize>,
    /// Number of nodes added to every network.
    #[arg(long)]
    pub nodes_added: Option<usize>,
    /// Master seed for every random draw of the run.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Output directory for the report and the figure.
    #[arg(long)]
    pub out: PathBuf,
    /// Skip rendering the SVG figure.
    #[arg(long)]
    pub no_figure: bool,
}

#[derive(Debug, Serialize)]
struct GrowthReport {
    provenance: RunProvenance,
    plan: GrowthPlan,
    networks: Vec<RunRecord>,
    timings: Timings,
}

#[derive(Debug, Serialize)]
struct RunRecord {
    retries: usize,
    seconds: f64,
    summary: NetworkSummary,
}

#[derive(Debug, Serialize)]
struct Timings {
    creation_seconds: f64,
    figure_seconds: f64,
    total_seconds: f64,
    figure: Option<String>,
}

pub fn run(args: &GrowArgs) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let plan = resolve_plan(args)?;
    plan.validate()?;
    fs::create_dir_all(&args.out)?;

    let outcome = grow_batch(&plan, args.seed)?;
    let creation_seconds = outcome.elapsed.as_secs_f64();
    info!("Network creation time {creation_seconds:.3} seconds");

    let figure_start = Instant::now();
    let figure = if args.no_figure {
        None
    } else {
        Some(write_figure(&args.out, &outcome, args.seed)?)
    };
    let figure_seconds = figure_start.elapsed().as_secs_f64();
    if figure.is_some() {
        info!("Figure generation time {figure_seconds:.3} seconds");
    }

    let report = GrowthReport {
        provenance: provenance(&plan, args.seed)?,
        networks: records(&outcome)?,
        plan,
        timings: Timings {
            creation_seconds,
            figure_seconds,
            total_seconds: start.elapsed().as_secs_f64(),
            figure: figure.map(|path| path.display().to_string()),
        },
    };
    let report_path = args.out.join("report.json");
    fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
    info!("Total time {:.3} seconds", report.timings.total_seconds);
    println!("{}", report_path.display());
    Ok(())
}

fn resolve_plan(args: &GrowArgs) -> Result<GrowthPlan, Box<dyn Error>> {
    let mut plan = match &args.plan {
        Some(path) => GrowthPlan::from_yaml_str(&fs::read_to_string(path)?)?,
        None => {
            if args.m0.is_empty() {
                return Err("either --plan or at least one --m0 is required".into());
            }
            GrowthPlan::new(Vec::new(), 1000)
        }
    };
    if !args.m0.is_empty() {
        plan.initial_sizes = args.m0.clone();
    }
    if let Some(nodes_added) = args.nodes_added {
        plan.nodes_added = nodes_added;
    }
    Ok(plan)
}

fn records(outcome: &BatchOutcome) -> Result<Vec<RunRecord>, Box<dyn Error>> {
    let summaries = outcome.summaries()?;
    Ok(outcome
        .runs
        .iter()
        .zip(summaries)
        .map(|(run, summary)| RunRecord {
            retries: run.retries,
            seconds: run.elapsed.as_secs_f64(),
            summary,
        })
        .collect())
}

fn write_figure(out: &Path, outcome: &BatchOutcome, seed: u64) -> Result<PathBuf, Box<dyn Error>> {
    let networks: Vec<&dyn GrowthStatistics> = outcome
        .runs
        .iter()
        .map(|run| &run.network as &dyn GrowthStatistics)
        .collect();
    let mut rng = RngHandle::substream(seed, STYLE_SUBSTREAM);
    let svg = render_growth_figure(&networks, &FigureConfig::default(), &mut rng)?;
    let path = out.join(figure_file_name(&Local::now().naive_local()));
    fs::write(&path, svg)?;
    Ok(path)
}

fn provenance(plan: &GrowthPlan, seed: u64) -> Result<RunProvenance, Box<dyn Error>> {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert("netgrow-sim".to_string(), env!("CARGO_PKG_VERSION").to_string());
    Ok(RunProvenance {
        plan_hash: plan.plan_hash()?,
        seed,
        created_at: Local::now().to_rfc3339(),
        tool_versions,
    })
}
