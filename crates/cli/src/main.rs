use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use yardcam::api::{
    compare, CompareCfg, GreedyCfg, Method, OrthoCfg, OrthoGenerator, Polygon,
    DEFAULT_GLOBAL_WEIGHT,
};

mod io;
mod provenance;
mod report;

use provenance::{GeneratorRun, Sidecar};
use report::Report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Camera placement on orthogonal polygons")]
struct Cmd {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random orthogonal polygon and write it as a point file
    Generate {
        #[arg(long, default_value_t = 20)]
        vertices: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = OrthoCfg::default().max_attempts)]
        max_attempts: u32,
        #[arg(long, default_value = "random_points.txt")]
        out: PathBuf,
    },
    /// Run the placers on a polygon and print one summary per method
    Analyze {
        /// Point file to analyze
        #[arg(long, required_unless_present = "generate", conflicts_with = "generate")]
        input: Option<PathBuf>,
        /// Generate a random polygon with this many vertices instead of reading one
        #[arg(long)]
        generate: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Where the generated polygon is saved
        #[arg(long, default_value = "random_points.txt")]
        points_out: PathBuf,
        #[arg(long, value_enum, default_value_t = MethodArg::All)]
        method: MethodArg,
        /// Weight of the global-visibility tie-break in the greedy score
        #[arg(long, default_value_t = DEFAULT_GLOBAL_WEIGHT)]
        weight: f64,
        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Write one CSV row per method
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print version, revision and defaults as JSON
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    All,
    Geometric,
    Greedy,
    Delaunay,
}

impl MethodArg {
    fn methods(self) -> Vec<Method> {
        match self {
            MethodArg::All => Method::ALL.to_vec(),
            MethodArg::Geometric => vec![Method::Geometric],
            MethodArg::Greedy => vec![Method::Greedy],
            MethodArg::Delaunay => vec![Method::Delaunay],
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else if cmd.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            vertices,
            seed,
            max_attempts,
            out,
        } => generate(vertices, seed, max_attempts, out),
        Action::Analyze {
            input,
            generate,
            seed,
            points_out,
            method,
            weight,
            json,
            table,
        } => {
            let (polygon, run) = match (input, generate) {
                (Some(path), _) => {
                    tracing::info!(input = %path.display(), "reading polygon");
                    (io::read_polygon(&path)?, None)
                }
                (None, Some(n)) => {
                    let (polygon, run) =
                        generate_polygon(n, seed, OrthoCfg::default(), &points_out)?;
                    (polygon, Some(run))
                }
                (None, None) => bail!("either --input or --generate is required"),
            };
            analyze(&polygon, run, method, weight, json, table)
        }
        Action::Report => report(),
    }
}

/// Generate, save as a point file and record how. Without `--seed` a fresh one
/// is drawn and logged so the run can be replayed.
fn generate_polygon(
    vertices: usize,
    seed: Option<u64>,
    cfg: OrthoCfg,
    out: &Path,
) -> Result<(Polygon, GeneratorRun)> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut gen = OrthoGenerator::new(cfg, seed)?;
    let generated = gen.generate(vertices)?;
    tracing::info!(
        vertices = generated.polygon.len(),
        attempts = generated.attempts,
        seed,
        out = %out.display(),
        "generated polygon"
    );
    io::write_polygon(out, &generated.polygon)?;
    let run = GeneratorRun {
        requested: vertices,
        seed,
        attempts: generated.attempts,
        max_attempts: cfg.max_attempts,
    };
    Sidecar::new("generate", &generated.polygon)
        .with_generator(Some(run))
        .write(out)?;
    Ok((generated.polygon, run))
}

fn generate(vertices: usize, seed: Option<u64>, max_attempts: u32, out: PathBuf) -> Result<()> {
    let cfg = OrthoCfg {
        max_attempts,
        ..OrthoCfg::default()
    };
    let (polygon, _) = generate_polygon(vertices, seed, cfg, &out)?;
    println!("wrote {} vertices to {}", polygon.len(), out.display());
    Ok(())
}

fn analyze(
    polygon: &Polygon,
    run: Option<GeneratorRun>,
    method: MethodArg,
    weight: f64,
    json: Option<PathBuf>,
    table: Option<PathBuf>,
) -> Result<()> {
    let cfg = CompareCfg {
        methods: method.methods(),
        greedy: GreedyCfg {
            global_weight: weight,
        },
    };
    let cmp = compare(polygon, &cfg);
    for outcome in &cmp.outcomes {
        let tag = outcome.method.name().to_uppercase();
        match &outcome.result {
            Ok(p) => {
                let summary = p.summary();
                if outcome.method == Method::Greedy {
                    println!(
                        "[{tag}] Cameras placed: {} (n/4={}, n/5={})",
                        summary.camera_count, cmp.quarter_bound, cmp.fifth_bound
                    );
                } else {
                    println!("[{tag}] Cameras placed: {}", summary.camera_count);
                }
                let coords: Vec<String> =
                    p.cameras.iter().map(|c| format!("({}, {})", c.x, c.y)).collect();
                println!("  cameras: {}", coords.join(" "));
                if let Some(w) = p.warning() {
                    println!("  warning: {w}");
                }
            }
            Err(e) => println!("[{tag}] failed: {e}"),
        }
    }

    let rep = Report::build(polygon, &cmp);
    let sidecar = || {
        Sidecar::new("analyze", polygon)
            .with_generator(run)
            .with_comparison(&cmp, weight)
    };
    if let Some(path) = json {
        rep.write_json(&path)?;
        sidecar().write(&path)?;
        tracing::info!(out = %path.display(), "wrote json report");
    }
    if let Some(path) = table {
        rep.write_table(&path)?;
        sidecar().write(&path)?;
        tracing::info!(out = %path.display(), "wrote csv table");
    }
    if !cmp.any_succeeded() {
        bail!("every placement method failed");
    }
    Ok(())
}

fn report() -> Result<()> {
    let gen = OrthoCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "yardcam_version": yardcam::VERSION,
        "methods": Method::ALL.iter().map(|m| m.name()).collect::<Vec<_>>(),
        "defaults": {
            "global_weight": DEFAULT_GLOBAL_WEIGHT,
            "max_attempts": gen.max_attempts,
            "vertical_step": [gen.vertical_step.min, gen.vertical_step.max],
            "horizontal_step": [gen.horizontal_step.min, gen.horizontal_step.max],
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
