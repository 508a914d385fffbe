//! Marga command-line entry point.
//!
//! Usage:
//!   marga                              # random grid from configs/config.yaml or defaults
//!   marga --width 8 --height 6 --seed 42
//!   marga --matrix grid.txt            # whitespace-separated rows
//!   marga --config my.yaml --max-solutions 100

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use marga::render::render_report;
use marga::{CachedSolver, Grid, HeuristicKind, MargaConfig};

/// Enumerate every minimum-cost path across a cost grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the grid from a text file instead of generating one
    #[arg(short, long)]
    matrix: Option<PathBuf>,

    /// Grid width (columns) for random generation
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (rows) for random generation
    #[arg(long)]
    height: Option<usize>,

    /// Smallest generated cell value (inclusive)
    #[arg(long)]
    min: Option<u32>,

    /// Largest generated cell value (exclusive)
    #[arg(long)]
    max: Option<u32>,

    /// RNG seed for reproducible grids
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fail if more than this many minimum-cost paths exist
    #[arg(long)]
    max_solutions: Option<usize>,

    /// Order the search by cost alone
    #[arg(long)]
    no_heuristic: bool,
}

fn load_config(args: &Args) -> Result<MargaConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            let config = MargaConfig::load(path)?;
            log::info!("Loaded config from {}", path.display());
            config
        }
        None => MargaConfig::load_default()?,
    };

    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }
    if let Some(min) = args.min {
        config.grid.min_value = min;
    }
    if let Some(max) = args.max {
        config.grid.max_value = max;
    }
    if args.seed.is_some() {
        config.grid.seed = args.seed;
    }
    if args.max_solutions.is_some() {
        config.search.max_solutions = args.max_solutions;
    }
    if args.no_heuristic {
        config.search.heuristic = HeuristicKind::None;
    }

    config.validate()?;
    Ok(config)
}

fn load_grid(
    config: &MargaConfig,
    matrix: Option<&Path>,
) -> Result<Grid, Box<dyn std::error::Error>> {
    match matrix {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let grid = Grid::from_text(&text)?;
            log::info!(
                "Loaded {}x{} grid from {}",
                grid.rows(),
                grid.cols(),
                path.display()
            );
            Ok(grid)
        }
        None => {
            let grid = config.build_grid()?;
            log::info!(
                "Generated {}x{} grid, values [{}, {}), seed {:?}",
                grid.rows(),
                grid.cols(),
                config.grid.min_value,
                config.grid.max_value,
                config.grid.seed
            );
            Ok(grid)
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    let grid = load_grid(&config, args.matrix.as_deref())?;

    let mut solver = CachedSolver::new(grid, config.to_search_config());

    let started = Instant::now();
    let result = solver.solve()?.clone();
    log::info!(
        "Search finished in {:.2?}: {} solution(s), {} cells expanded",
        started.elapsed(),
        result.len(),
        result.stats.cells_expanded
    );

    let report = render_report(solver.grid(), &result)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
