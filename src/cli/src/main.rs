mod config;
mod net;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::{Section, SectionExt, eyre::eyre};
use cube_core::{Algorithm, CubeState, MoveEngine, PuzzleKind};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

use crate::config::CliConfig;

/// Applies WCA scrambles to N×N×N cubes
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube/config.toml` in the user's config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a scramble to a solved cube and print the net.
    Scramble {
        /// The scramble, e.g. "Rw U2 3Fw' R".
        scramble: String,
        #[command(flatten)]
        cube: CubeArgs,
        /// Print color letters instead of painted stickers.
        #[arg(long)]
        plain: bool,
    },
    /// Print the sequence that undoes a scramble.
    Invert {
        /// The scramble to invert.
        scramble: String,
    },
    /// Check whether a solution solves a scramble.
    Check {
        /// The scramble to apply first.
        scramble: String,
        /// The moves to apply afterwards.
        solution: String,
        #[command(flatten)]
        cube: CubeArgs,
    },
    /// Print the configuration in effect, as TOML.
    Config,
}

#[derive(Args, Default)]
struct CubeArgs {
    /// Number of layers along each edge.
    #[arg(long, short, conflicts_with = "puzzle")]
    size: Option<usize>,
    /// Puzzle name such as 4x4 or 444.
    #[arg(long, short)]
    puzzle: Option<PuzzleKind>,
}

impl CubeArgs {
    fn build(&self, config: &CliConfig) -> color_eyre::Result<CubeState> {
        let size = match (self.size, self.puzzle) {
            (Some(size), _) => size,
            (None, Some(puzzle)) => puzzle.size(),
            (None, None) => config.default_size,
        };

        if size == 0 {
            return Err(eyre!("A cube needs at least one layer"));
        }

        Ok(CubeState::new(size))
    }
}

/// Runs one command and returns what it prints.
fn run(command: Commands, config: &CliConfig) -> color_eyre::Result<String> {
    match command {
        Commands::Scramble {
            scramble,
            cube,
            plain,
        } => {
            let mut cube = cube.build(config)?;
            MoveEngine::apply(&mut cube, &scramble)?;
            info!(target: "cli", "Scrambled a {0}x{0} cube", cube.size());

            if plain || !config.color_output {
                Ok(cube.to_string())
            } else {
                Ok(net::paint(&cube, &config.palette))
            }
        }
        Commands::Invert { scramble } => {
            let algorithm: Algorithm = scramble.parse()?;
            Ok(format!("{}\n", algorithm.inverse()))
        }
        Commands::Check {
            scramble,
            solution,
            cube,
        } => {
            let mut cube = cube.build(config)?;
            MoveEngine::apply(&mut cube, &scramble)?;
            MoveEngine::apply(&mut cube, &solution)?;

            if !cube.is_solved() {
                let net = cube.to_string().header("Cube:");
                return Err(eyre!("Not solved").section(net));
            }

            Ok(format!("{}\n", "Solved".green()))
        }
        Commands::Config => Ok(toml::to_string(config)?),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    print!("{}", run(cli.command, &config)?);

    Ok(())
}
