//! CLI for playing the hat maze

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use find_your_hat::{shortest_path, Direction, Game, MazeConfig, Outcome, Point};

/// Find your hat without falling into a hole
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Field height
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Field width
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

    /// Let the computer walk the shortest path instead of reading moves
    #[arg(short, long)]
    autoplay: bool,

    /// Autoplay frame length in milliseconds
    #[arg(short, long, default_value_t = 300)]
    frame_length: u64,
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

fn direction_for_key(key: &str) -> Option<Direction> {
    match key.trim().to_uppercase().as_str() {
        "W" => Some(Direction::Up),
        "A" => Some(Direction::Left),
        "S" => Some(Direction::Down),
        "D" => Some(Direction::Right),
        _ => None,
    }
}

fn direction_between(from: Point, to: Point) -> Option<Direction> {
    match (to.x as isize - from.x as isize, to.y as isize - from.y as isize) {
        (0, -1) => Some(Direction::Up),
        (0, 1) => Some(Direction::Down),
        (-1, 0) => Some(Direction::Left),
        (1, 0) => Some(Direction::Right),
        _ => None,
    }
}

fn print_field(game: &Game, clear: bool) {
    if clear {
        print!("\x1B[2J\x1B[1;1H");
    }
    println!("{}\n", game.maze());
}

/// Read moves from stdin until the session ends
fn play(game: &mut Game) -> anyhow::Result<Option<Outcome>> {
    println!("Move with WASD and press Enter\n");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_field(game, false);
        print!("Which way? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read move")?;
        match direction_for_key(&line) {
            Some(direction) => {
                if let Some(outcome) = game.step(direction) {
                    return Ok(Some(outcome));
                }
            }
            None => println!("Move with WASD"),
        }
    }
}

/// Walk the shortest path, one frame per step
fn autoplay(game: &mut Game, frame_length: u64) -> anyhow::Result<Option<Outcome>> {
    let Some(path) = shortest_path(game.maze()) else {
        bail!("Accepted field has no path to the hat");
    };
    print_field(game, true);
    let mut outcome = None;
    for pair in path.windows(2) {
        thread::sleep(Duration::from_millis(frame_length));
        let direction =
            direction_between(pair[0], pair[1]).context("Path steps are not adjacent")?;
        outcome = game.step(direction);
        print_field(game, true);
    }
    Ok(outcome)
}

/// Generate a solvable field and play it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig::from(&args);
    let maze = config.generate().context("Could not generate a field")?;
    let mut game = Game::new(maze);

    let outcome = if args.autoplay {
        autoplay(&mut game, args.frame_length)?
    } else {
        play(&mut game)?
    };
    if let Some(outcome) = outcome {
        println!("{}", outcome.message());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_keys_map_to_directions() {
        assert_eq!(direction_for_key("w\n"), Some(Direction::Up));
        assert_eq!(direction_for_key("A"), Some(Direction::Left));
        assert_eq!(direction_for_key(" s "), Some(Direction::Down));
        assert_eq!(direction_for_key("d"), Some(Direction::Right));
        assert_eq!(direction_for_key("q"), None);
    }

    #[test]
    fn neighbouring_points_give_a_direction() {
        let from = Point::new(1, 1);
        assert_eq!(direction_between(from, Point::new(1, 0)), Some(Direction::Up));
        assert_eq!(direction_between(from, Point::new(2, 1)), Some(Direction::Right));
        assert_eq!(direction_between(from, Point::new(3, 1)), None);
    }
}
