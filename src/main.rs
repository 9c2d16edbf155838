use anyhow::{bail, Context};
use clap::Parser;
use quad_detection::{config, process, Segment, Tolerances};
use std::path::PathBuf;
use std::time::Instant;

/// Finds the four corners of a document from detected line segments.
#[derive(Parser, Debug)]
#[command(name = "quad-detect", version)]
struct Args {
    /// JSON array of segments, each `[x1, y1, x2, y2]`.
    #[arg(long)]
    input: PathBuf,

    /// JSON file with `rho_tolerance` and `theta_tolerance` (radians).
    #[arg(long, conflicts_with_all = ["rho", "theta_deg"])]
    config: Option<PathBuf>,

    /// Offset tolerance in pixels.
    #[arg(long, requires = "theta_deg")]
    rho: Option<f64>,

    /// Angle tolerance in degrees.
    #[arg(long, requires = "rho")]
    theta_deg: Option<f64>,

    /// Print per-stage durations to stderr.
    #[arg(long)]
    timings: bool,
}

fn tolerances(args: &Args) -> anyhow::Result<Tolerances> {
    match (&args.config, args.rho, args.theta_deg) {
        (Some(path), _, _) => Ok(config::load_tolerances(path)?),
        (None, Some(rho), Some(theta)) => Ok(Tolerances::from_degrees(rho, theta)?),
        _ => bail!("either --config or both --rho and --theta-deg are required"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tolerances = tolerances(&args)?;
    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let segments: Vec<Segment> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse segments from {}", args.input.display()))?;

    let time = Instant::now();
    let (times, quad) = process(&segments, &tolerances);

    if args.timings {
        eprintln!("[{:?}] polar", times.polar);
        eprintln!("[{:?}] lines", times.lines);
        eprintln!("[{:?}] groups", times.groups);
        eprintln!("[{:?}] corners", times.corners);
        eprintln!("[{:?}] processed {:?}", time.elapsed(), args.input);
    }

    let quad = quad.with_context(|| format!("no quadrilateral in {} segments", segments.len()))?;
    let corners = quad.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>();
    println!("{}", serde_json::to_string(&corners)?);

    Ok(())
}
