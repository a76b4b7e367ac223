use std::{fs, io::stdout, path::PathBuf, thread, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::info;

use lifegrid::{parse, Generations, View, World};

#[derive(Debug, Parser)]
#[command(name = "lifegrid", about = "Plays the game of life from a plain text pattern")]
struct Args {
    /// Pattern file, `#` marks an alive cell
    path: PathBuf,
    /// Grid width, defaults to the pattern width
    #[arg(long)]
    width: Option<u32>,
    /// Grid height, defaults to the pattern height
    #[arg(long)]
    height: Option<u32>,
    /// Number of generations to show, the seed included
    #[arg(long, default_value_t = 100)]
    generations: usize,
    /// Delay between two generations
    #[arg(long, default_value_t = 200)]
    interval_ms: u64,
    /// Print frames one after another instead of redrawing the terminal
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read pattern {}", args.path.display()))?;
    let pattern = parse(&content);
    let width = args.width.unwrap_or(pattern.width);
    let height = args.height.unwrap_or(pattern.height);
    let seed = pattern
        .into_environment(height, width)
        .context("pattern does not fit the requested grid")?;
    info!(
        "playing {} generations on a {width}x{height} grid with {} alive cells",
        args.generations,
        seed.population()
    );

    let interval = Duration::from_millis(args.interval_ms);
    let mut view = View::new(stdout(), args.plain);
    for (generation, world) in Generations::new(seed).take(args.generations).enumerate() {
        view.display(generation, &world)
            .context("failed to draw generation")?;
        if world.is_extinct() {
            info!("extinct at generation {generation}");
            break;
        }
        thread::sleep(interval);
    }
    Ok(())
}
