//! Pipeline CLI
//!
//! Expand checkers positions per worker and store the scored results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use checkers_core::{Board, Side, count_leaves, expand, expand_breadth_first};
use clap::{Parser, Subcommand, ValueEnum};
use pipeline::{
    Evaluator, PipelineConfig, RootMode, RunSettings, Runner, SlotFileSink, roots_for,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipeline", version, about = "Checkers position enumerator and leaf pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every worker and write one record per worker
    Run(RunArgs),
    /// Expand a single board and print its leaves
    Expand(ExpandArgs),
    /// Print a worker's record from an output file
    Show(ShowArgs),
    /// Print the default configuration as TOML
    Config,
}

#[derive(clap::Args)]
struct RunArgs {
    /// TOML config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    workers: Option<usize>,
    #[arg(short, long)]
    depth: Option<u8>,
    #[arg(long, value_enum)]
    first_to_move: Option<SideArg>,
    #[arg(long, value_enum)]
    roots: Option<RootMode>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ExpandArgs {
    /// Rendered board to start from (defaults to the opening)
    #[arg(short, long)]
    board: Option<PathBuf>,
    #[arg(short, long, default_value_t = 4)]
    depth: u8,
    #[arg(short, long, value_enum, default_value_t = SideArg::Red)]
    side: SideArg,
    /// Number of leaves to print
    #[arg(long, default_value_t = 0)]
    show: usize,
    /// Only count leaves, without keeping them
    #[arg(long)]
    count_only: bool,
    #[arg(long)]
    breadth_first: bool,
}

#[derive(clap::Args)]
struct ShowArgs {
    output: PathBuf,
    worker: usize,
    /// Config the output was written with; supplies `slot_bytes`
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the config's slot size
    #[arg(long)]
    slot_bytes: Option<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SideArg {
    Red,
    Black,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Red => Side::Red,
            SideArg::Black => Side::Black,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Run(args) => run(args),
        Command::Expand(args) => expand_one(args),
        Command::Show(args) => show(args),
        Command::Config => {
            print!("{}", PipelineConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(side) = args.first_to_move {
        config.first_to_move = side.into();
    }
    if let Some(roots) = args.roots {
        config.roots = roots;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if args.summary.is_some() {
        config.summary = args.summary;
    }
    config.validate()?;

    let sink = SlotFileSink::create(&config.output, config.slot_bytes)
        .with_context(|| format!("creating {}", config.output.display()))?;
    let roots = roots_for(&config);
    let runner = Runner::new(
        RunSettings::from(&config),
        roots.as_ref(),
        &config.evaluator,
        &sink,
    );

    let summary = runner.run();
    summary.print_report();
    info!(output = %config.output.display(), "records written");

    if let Some(path) = &config.summary {
        summary
            .save(path)
            .with_context(|| format!("saving summary to {}", path.display()))?;
    }

    let failed = summary.failed().count();
    if failed > 0 {
        bail!("{failed} of {} workers failed", summary.workers);
    }
    Ok(())
}

fn expand_one(args: ExpandArgs) -> Result<()> {
    let board = match &args.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            text.parse::<Board>()
                .with_context(|| format!("parsing board in {}", path.display()))?
        }
        None => Board::startpos(),
    };
    let side = Side::from(args.side);

    println!("{board}");
    if args.count_only {
        println!("leaves {}", count_leaves(&board, args.depth, side));
        return Ok(());
    }

    let leaves = if args.breadth_first {
        expand_breadth_first(&board, args.depth, side)
    } else {
        expand(&board, args.depth, side)
    };
    let evaluator = PipelineConfig::default().evaluator;
    println!(
        "leaves {} score {}",
        leaves.len(),
        evaluator.evaluate(&leaves)
    );

    for (i, leaf) in leaves.iter().take(args.show).enumerate() {
        println!();
        println!("leaf {i}");
        print!("{leaf}");
    }
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let slot_bytes = match args.slot_bytes {
        Some(n) => n,
        None => load_config(args.config.as_deref())?.slot_bytes,
    };

    let sink = SlotFileSink::open(&args.output, slot_bytes);
    match sink.read(args.worker)? {
        Some(record) => println!("{record}"),
        None => bail!(
            "no record for worker {} in {}",
            args.worker,
            args.output.display()
        ),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    PipelineConfig::load_or_default(path).with_context(|| match path {
        Some(path) => format!("loading {}", path.display()),
        None => "default config".to_string(),
    })
}
