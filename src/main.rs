use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use trimaze::bin::ascii_utils::visualize_path;
use trimaze::bin::generator::generate;
use trimaze::bin::json_utils::path_to_json;
use trimaze::{load_maze, validate_file, HandRule, MazeError, TraceOptions, Walk};

/// Finds a way out of a triangular-cell maze by following a wall.
#[derive(Parser)]
#[command(name = "trimaze", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that FILE contains a valid maze
    #[command(long_flag = "test")]
    Test { file: PathBuf },

    /// Find a path out of the maze in FILE from row R, column C, using the right hand rule
    #[command(long_flag = "rpath")]
    Rpath(PathArgs),

    /// Find a path out of the maze in FILE from row R, column C, using the left hand rule
    #[command(long_flag = "lpath")]
    Lpath(PathArgs),

    /// Print a random consistent maze
    Generate {
        rows: usize,
        cols: usize,

        /// Seed for a reproducible maze
        #[arg(long)]
        seed: Option<u64>,

        /// Probability that any single border is closed
        #[arg(long, default_value_t = 0.5)]
        wall_probability: f64,
    },
}

#[derive(Args)]
struct PathArgs {
    row: usize,
    col: usize,
    file: PathBuf,

    /// Give up after this many steps (default: 3 * rows * cols)
    #[arg(long, env = "TRIMAZE_MAX_STEPS")]
    max_steps: Option<usize>,

    /// Print the path as JSON
    #[arg(long)]
    json: bool,

    /// Draw the maze with the path marked after the path
    #[arg(long)]
    draw: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Test { file } => {
            if validate_file(&file) {
                println!("Valid");
            } else {
                println!("Invalid");
            }
            Ok(())
        }
        Command::Rpath(args) => find_path(args, HandRule::RightHand),
        Command::Lpath(args) => find_path(args, HandRule::LeftHand),
        Command::Generate {
            rows,
            cols,
            seed,
            wall_probability,
        } => {
            if !(0.0..=1.0).contains(&wall_probability) {
                anyhow::bail!("--wall-probability must be between 0 and 1");
            }
            let maze = match seed {
                Some(seed) => generate(rows, cols, wall_probability, &mut StdRng::seed_from_u64(seed)),
                None => generate(rows, cols, wall_probability, &mut rand::rng()),
            }
            .context("rows and cols must be positive")?;
            print!("{}", maze);
            Ok(())
        }
    }
}

fn find_path(args: PathArgs, rule: HandRule) -> Result<()> {
    let maze = load_maze(&args.file)
        .with_context(|| "Invalid map, please try to run `--test` command")?;
    if !trimaze::is_valid(&maze) {
        eprintln!("Invalid map, please try to run `--test` command");
    }

    let options = TraceOptions {
        max_steps: args.max_steps,
    };
    let walk = match Walk::new(&maze, args.row, args.col, rule, options) {
        Ok(walk) => walk,
        Err(MazeError::CannotEnter { .. } | MazeError::OutOfRange { .. }) => {
            println!(
                "Can't enter the maze from cell on row `{}` and column `{}`",
                args.row, args.col
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut path = Vec::new();
    for step in walk {
        let (row, col) = step?;
        if !args.json {
            println!("{},{}", row, col);
        }
        path.push((row, col));
    }

    if args.json {
        println!("{}", path_to_json(rule, &path));
    }
    if args.draw {
        print!("{}", visualize_path(&maze, &path));
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
