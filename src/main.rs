use anyhow::{ensure, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use oil_survey::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use std::fs::{create_dir_all, File};
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// log level used when RUST_LOG is not set
    #[clap(long, global = true, default_value = "warn")]
    log_level: String,

    /// log output format
    #[clap(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Detect deposits in one or more survey files (stdin when none given)
    Survey(SurveyArgs),
    /// Write a synthetic survey grid
    Generate(GenerateArgs),
}

#[derive(Args)]
struct SurveyArgs {
    /// survey files with one grid row per line ('X' marks oil)
    inputs: Vec<PathBuf>,

    /// clustering strategy (indexed, lru)
    #[clap(long, default_value_t = Strategy::Indexed)]
    strategy: Strategy,

    /// print only the deposit count
    #[clap(long)]
    quiet: bool,

    /// write a JSON report per input into this folder
    #[clap(long)]
    json: Option<PathBuf>,

    /// write a PNG rendering per input into this folder
    #[clap(long)]
    image: Option<PathBuf>,

    /// pixels per tile in PNG output
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
    scale: u32,
}

#[derive(Args)]
struct GenerateArgs {
    #[clap(long, default_value_t = 64)]
    width: usize,

    #[clap(long, default_value_t = 64)]
    height: usize,

    /// oil probability in sixteenths (0 to 16)
    #[clap(long, conflicts_with_all = ["checkerboard", "islands"])]
    density: Option<u32>,

    /// alternate oil and empty tiles
    #[clap(long, conflicts_with = "islands")]
    checkerboard: bool,

    /// place this many isolated single-tile deposits (ignores width/height)
    #[clap(long)]
    islands: Option<usize>,

    #[clap(long)]
    seed: Option<u64>,

    /// output file (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

/// Initialize tracing subscriber with the given log level and output format.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init(),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "survey".to_string())
}

/// Everything printed for one input, collected so parallel runs print in order.
fn survey_one(name: &str, survey: &Survey, args: &SurveyArgs) -> anyhow::Result<String> {
    let started = Instant::now();
    let deposits = survey.deposits();
    info!(
        input = name,
        deposits = deposits.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "survey finished"
    );

    if let Some(dir) = &args.json {
        let report = SurveyReport::new(survey, Some(name.to_string()));
        let out_file_path = dir.join(format!("{}.json", file_stem(Path::new(name))));
        let mut f = File::create(&out_file_path)
            .with_context(|| format!("failed to create {:?}", out_file_path))?;
        f.write_all(report.to_json()?.as_bytes())?;
    }

    if let Some(dir) = &args.image {
        let out_file_path = dir.join(format!("{}.png", file_stem(Path::new(name))));
        survey.encoder().save(&out_file_path, args.scale)?;
    }

    if args.quiet {
        return Ok(format!("{}: {}", name, deposits.len()));
    }

    let mut out = vec![];
    out.push(survey.grid().to_text());
    out.push(format!("\n> Discovered {} new deposit(s)! <\n", deposits.len()));
    out.push(survey.render_text());
    Ok(out.join("\n"))
}

fn run_survey(args: SurveyArgs) -> anyhow::Result<()> {
    for dir in [&args.json, &args.image].into_iter().flatten() {
        create_dir_all(dir).with_context(|| format!("failed to create {:?}", dir))?;
    }

    if args.inputs.is_empty() {
        let grid = Grid::read_from(io::stdin().lock()).context("failed to read stdin")?;
        let survey = Survey::with_strategy(grid, args.strategy);
        println!("{}", survey_one("stdin", &survey, &args)?);
        return Ok(());
    }

    for input in &args.inputs {
        ensure!(input.exists(), "input file {:?} does not exist!", input);
    }

    let outputs: Vec<anyhow::Result<String>> = args
        .inputs
        .par_iter()
        .map(|input| {
            let survey = Survey::read(input, args.strategy)?;
            survey_one(&input.to_string_lossy(), &survey, &args)
        })
        .collect();

    let mut failed = 0;
    for (input, output) in args.inputs.iter().zip(outputs) {
        match output {
            Ok(text) => println!("{}", text),
            Err(e) => {
                warn!(input = %input.display(), "survey failed: {:?}", e);
                failed += 1;
            }
        }
    }
    ensure!(failed == 0, "{} of {} surveys failed", failed, args.inputs.len());

    Ok(())
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let grid = if let Some(count) = args.islands {
        generator::islands(count)
    } else if args.checkerboard {
        generator::checkerboard(args.width, args.height)
    } else {
        let density = args.density.unwrap_or(8);
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generator::noise(args.width, args.height, density, &mut rng)?
    };

    info!(
        rows = grid.height(),
        columns = grid.width(),
        oil = grid.oil_count(),
        "generated survey"
    );

    let text = grid.to_text();
    match args.output {
        Some(path) => {
            let mut f =
                File::create(&path).with_context(|| format!("failed to create {:?}", path))?;
            writeln!(f, "{}", text)?;
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Command::Survey(args) => run_survey(args),
        Command::Generate(args) => run_generate(args),
    }
}
