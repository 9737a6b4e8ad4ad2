//! CLI for field generation

use anyhow::Context;
use clap::Parser;
use find_your_hat::MazeConfig;

/// Print a solvable hat maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field height
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Generated field width
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Percentage of cells that are holes (0-50)
    #[arg(short, long, default_value_t = 30)]
    density: usize,

    /// Fields to try before giving up
    #[arg(long, default_value_t = 100)]
    max_attempts: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&Args> for MazeConfig {
    fn from(args: &Args) -> Self {
        Self {
            height: args.height,
            width: args.width,
            density: args.density,
            max_attempts: args.max_attempts,
            seed: args.seed,
        }
    }
}

/// Generate a field, print it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig::from(&args);
    let maze = config.generate().context("Could not generate a field")?;
    println!("{}", maze);
    Ok(())
}
