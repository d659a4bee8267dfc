use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use golfgeo::config::FileConfig;
use golfgeo::data::{HoleMapCatalog, load_course};
use golfgeo::domain::{BallPoint, GeoPoint, NormalizedPoint, Severity};
use golfgeo::geometry::{DistanceUnit, ImageBounds, format_distance};
use golfgeo::location::{
    FixedSource, LocationError, LocationOutcome, UnavailableSource, spawn_fix_request,
};
use golfgeo::play::{LiveAdvice, advice_from_fix, estimate_advice};
use golfgeo::qa::validate_with;

/// Golf course geometry QA and live distance advice
///
/// Examples:
///   # Check a course before publishing
///   golfgeo validate course.json
///
///   # Distance from a ball marker at 50%/40% of the hole image
///   golfgeo advise --layouts maps.json --course-id links --hole 4 --x 50 --y 40
///
///   # Same, from a raw tap on a 390x844 image
///   golfgeo advise --layouts maps.json --course-id links --hole 4 --tap 195,300 --image-size 390,844
///
///   # Distance to the green from the device position
///   golfgeo locate course.json --hole 4 --lat 56.3433 --lng -2.8027
#[derive(Parser, Debug)]
#[command(name = "golfgeo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches golfgeo.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display unit for distances
    #[arg(short = 'u', long, global = true)]
    unit: Option<DistanceUnit>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate course geometry and print the QA report
    Validate {
        /// Course JSON file
        course: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error when the report contains errors
        #[arg(long)]
        strict: bool,
    },
    /// Estimate remaining distance from a ball marker on the hole image
    Advise(AdviseArgs),
    /// Estimate remaining distance from the device position
    Locate {
        /// Course JSON file
        course: PathBuf,

        #[arg(long)]
        hole: u32,

        /// Simulated device latitude (use with --lng)
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Simulated device longitude (use with --lat)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Give up waiting for a fix after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[derive(ClapArgs, Debug)]
struct AdviseArgs {
    /// Hole map catalog JSON file
    #[arg(long)]
    layouts: PathBuf,

    #[arg(long)]
    course_id: String,

    #[arg(long)]
    hole: u32,

    /// Ball position in image percent (use with --y)
    #[arg(long, requires = "y", conflicts_with = "tap")]
    x: Option<f64>,

    /// Ball position in image percent (use with --x)
    #[arg(long, requires = "x")]
    y: Option<f64>,

    /// Tap position in pixels, as X,Y (use with --image-size)
    #[arg(long, value_parser = parse_pair, requires = "image_size")]
    tap: Option<(f64, f64)>,

    /// Rendered image size in pixels, as WIDTH,HEIGHT
    #[arg(long, value_parser = parse_pair)]
    image_size: Option<(f64, f64)>,
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got '{}'", s))?;
    let a = a.trim().parse().map_err(|e| format!("{}: {}", a, e))?;
    let b = b.trim().parse().map_err(|e| format!("{}: {}", b, e))?;
    Ok((a, b))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config_source, file_config) = match args.config {
        Some(ref config_path) => {
            if !config_path.exists() {
                bail!("Config file not found: {:?}", config_path);
            }
            let config = FileConfig::from_path(config_path).context("Invalid config file")?;
            (Some(config_path.clone()), config)
        }
        None => match FileConfig::discover().context("Invalid config file")? {
            Some((path, config)) => (Some(path), config),
            None => (None, FileConfig::default()),
        },
    };

    let verbose = args.verbose || file_config.verbose;
    init_tracing(verbose);
    match config_source {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }

    let unit = args.unit.unwrap_or(file_config.unit);

    match args.command {
        Command::Validate {
            course,
            json,
            strict,
        } => run_validate(&file_config, course, json, strict),
        Command::Advise(advise) => run_advise(advise, unit),
        Command::Locate {
            course,
            hole,
            lat,
            lng,
            timeout_secs,
        } => {
            let fixed = match (lat, lng) {
                (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
                _ => file_config.location.fixed_point(),
            };
            let timeout = timeout_secs
                .map(Duration::from_secs)
                .unwrap_or_else(|| file_config.location.timeout());
            run_locate(course, hole, fixed, timeout, unit).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_validate(config: &FileConfig, path: PathBuf, json: bool, strict: bool) -> Result<()> {
    let course = load_course(&path).context("Failed to load course")?;
    let report = validate_with(&course.holes, &config.qa, chrono::Utc::now());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        let title = course.name.as_deref().unwrap_or(&course.course_id);
        println!("{} - {} holes", title, course.holes.len());
        println!("Checked at {}", report.checked_at.to_rfc3339());
        println!();
        for issue in &report.issues {
            let tag = match issue.severity {
                Severity::Error => "ERROR",
                Severity::Warning => "WARN ",
            };
            println!("  [{}] hole {:>2}: {}", tag, issue.hole, issue.message);
        }
        if !report.issues.is_empty() {
            println!();
        }
        println!("{}", report.summary());
    }

    if strict && !report.is_publishable() {
        bail!(
            "Course has {} geometry errors and cannot be published",
            report.error_count
        );
    }

    Ok(())
}

fn run_advise(args: AdviseArgs, unit: DistanceUnit) -> Result<()> {
    let catalog = HoleMapCatalog::load(&args.layouts).context("Failed to load hole layouts")?;
    let map = catalog.hole(&args.course_id, args.hole)?;

    let point = match (args.x, args.y, args.tap, args.image_size) {
        (Some(x), Some(y), _, _) => NormalizedPoint::clamped(x, y),
        (_, _, Some((tx, ty)), Some((w, h))) => ImageBounds::new(0.0, 0.0, w, h)
            .tap_to_normalized(tx, ty)
            .context("Image size must be positive")?,
        _ => bail!("Provide a ball position with --x/--y or --tap with --image-size"),
    };
    let ball = BallPoint::manual(point);

    println!(
        "Hole {} (par {}, stroke index {})",
        map.hole, map.par, map.stroke_index
    );
    println!("Ball at ({:.1}%, {:.1}%)", point.x, point.y);

    match estimate_advice(map, &ball) {
        Some(advice) => {
            let front_back = map.green_front_back(advice.remaining_meters);
            print_advice(&advice, Some(front_back), unit);
        }
        None => println!("No distance available: hole layout has no tee-to-green length"),
    }

    Ok(())
}

async fn run_locate(
    path: PathBuf,
    hole_number: u32,
    fixed: Option<GeoPoint>,
    timeout: Duration,
    unit: DistanceUnit,
) -> Result<()> {
    let course = load_course(&path).context("Failed to load course")?;
    let Some(hole) = course.hole(hole_number) else {
        bail!("Course {} has no hole {}", course.course_id, hole_number);
    };

    let spinner = create_spinner("Waiting for position fix...");
    let request = match fixed {
        Some(point) => spawn_fix_request(Arc::new(FixedSource::new(point)), timeout),
        None => spawn_fix_request(
            Arc::new(UnavailableSource::new(LocationError::Unavailable)),
            timeout,
        ),
    };
    let outcome = request.await.context("Position request task failed")?;
    spinner.finish_with_message(outcome.to_string());

    match outcome {
        LocationOutcome::Fix(fix) => {
            let advice = advice_from_fix(fix, hole);
            println!("Hole {} (par {})", hole.number, hole.par);
            print_advice(&advice, None, unit);
        }
        LocationOutcome::Denied(_) | LocationOutcome::TimedOut => {
            println!("No GPS distance available. Tap the hole map to place your ball instead.");
        }
    }

    Ok(())
}

fn print_advice(advice: &LiveAdvice, front_back: Option<(u32, u32)>, unit: DistanceUnit) {
    println!("{}", advice.describe(unit));
    if let Some((front, back)) = front_back {
        println!(
            "  front {} / back {}",
            format_distance(front as f64, unit),
            format_distance(back as f64, unit)
        );
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
