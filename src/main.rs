use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use submarines::{
    init_logging, print_board, Coord, GameStatus, PieceConfig, PieceKind, Signal, SubmarinesGame,
};

/// Two-player hot-seat Submarines.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board rows.
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Board columns.
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// Jets per board.
    #[arg(long, default_value_t = 1)]
    jets: u32,
    /// Destroyers per board.
    #[arg(long, default_value_t = 1)]
    destroyers: u32,
    /// Submarines per board.
    #[arg(long, default_value_t = 1)]
    submarines: u32,
    /// Fix RNG seed for reproducible games (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line
        .split(|ch: char| ch.is_whitespace() || matches!(ch, ',' | '(' | ')'))
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let plane = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col, plane))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = PieceConfig::new()
        .with(PieceKind::General, 1)
        .with(PieceKind::Jet, cli.jets)
        .with(PieceKind::Destroyer, cli.destroyers)
        .with(PieceKind::Submarine, cli.submarines);

    let mut game = SubmarinesGame::new((cli.rows, cli.cols, 3), &config)
        .context("invalid game configuration")?;

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("using fixed seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    game.place_pieces(&mut rng)
        .context("could not place all pieces")?;

    println!("Welcome to another game of Submarines!");
    println!(
        "The shape of today's board is ({}, {}, 3).",
        cli.rows, cli.cols
    );
    println!("Type `show` to show your board, and `quit` to exit the game prematurely.");
    println!("The pieces were set (randomly), let the game begin!");

    let stdin = io::stdin();
    while game.status() == GameStatus::InProgress {
        let player = game.to_move();
        print!("{}, what is the coordinate you're targeting (row col plane)? ", player);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "quit" => {
                println!("Quitting");
                return Ok(());
            }
            "show" => {
                print_board(&game.board(player).snapshot());
                continue;
            }
            _ => {}
        }

        let Some(coord) = parse_coord(line) else {
            println!("Could not read a coordinate from {:?}.", line);
            continue;
        };
        match game.fire(coord) {
            Ok(signal) => {
                debug!("{} fired at {:?}: {}", player, coord, signal);
                println!("{}", signal);
                if signal == Signal::End {
                    println!("The game is over! The winner is {}.", player);
                }
            }
            // Out-of-bounds shot: the turn is not consumed, re-prompt.
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}
