use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blury::core::format_threshold;
use blury::detect;
use blury::policy::{validate_threshold, ScoringPolicy};
use blury::report::FocusReport;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blury",
    version,
    about = "Classify images as blurry or sharp with a Laplacian focus measure"
)]
struct Cli {
    /// Log progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one or more images.
    Score(ScoreArgs),
    /// Write the default scoring policy as JSON.
    InitConfig {
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Scores below this are blurry. Overrides the config file.
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Resample images wider than this before scoring (0 = never). Overrides the config file.
    #[arg(long)]
    max_width: Option<usize>,

    /// JSON scoring policy.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON array of reports instead of text lines.
    #[arg(long)]
    json: bool,
}

const EXIT_UNAVAILABLE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Score(args) => run_score(args),
        Command::InitConfig { path, force } => run_init_config(&path, force),
    };
    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

#[cfg(feature = "tracing")]
fn init_logging(_verbose: bool) {
    blury::core::init_tracing(false);
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = blury::core::init_with_level(level);
}

fn resolve_policy(args: &ScoreArgs) -> Result<ScoringPolicy, Box<dyn std::error::Error>> {
    let mut policy = match &args.config {
        Some(path) => ScoringPolicy::load_json(path)?,
        None => ScoringPolicy::default(),
    };
    if let Some(threshold) = args.threshold {
        validate_threshold(threshold)?;
        policy.threshold = threshold;
    }
    if let Some(max_width) = args.max_width {
        policy.max_width = max_width;
    }
    Ok(policy)
}

fn run_score(args: ScoreArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let policy = resolve_policy(&args)?;
    log::info!(
        "threshold {}, max width {}",
        format_threshold(policy.threshold),
        policy.max_width
    );

    let reports: Vec<FocusReport> = args
        .images
        .iter()
        .map(|path| {
            let source = Some(path.display().to_string());
            match detect::score_path(path, &policy) {
                Ok(scored) => FocusReport::scored(source, policy.threshold, &scored),
                Err(err) => {
                    log::warn!("{}: {err}", path.display());
                    FocusReport::unavailable(source, policy.threshold, err)
                }
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let source = report.source.as_deref().unwrap_or("-");
            println!("{source}: {}", report.render_line());
        }
    }

    if reports.iter().all(FocusReport::is_available) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_UNAVAILABLE))
    }
}

fn run_init_config(path: &Path, force: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }
    ScoringPolicy::default().write_json(path)?;
    println!("wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}
