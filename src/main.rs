//! Tic-tac-toe engine - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use tictactoe_engine::{
    Board, EngineConfig, Game, GameId, GameService, GameSnapshot, InMemoryGameRepository, Player,
    Position, ServiceError,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { human } => {
            let config = match human {
                Some(player) => config.with_human_player(player),
                None => config,
            };
            run_play(&config)
        }
        Command::Suggest {
            board,
            player,
            json,
        } => run_suggest(&config, &board, player, json),
        Command::Selfplay => run_selfplay(&config),
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Interactive game: the human plays one side, the configured strategy the other.
#[instrument(skip(config), fields(human = %config.human_player(), strategy = ?config.strategy()))]
fn run_play(config: &EngineConfig) -> Result<()> {
    let human = *config.human_player();
    let service = GameService::with_strategy(InMemoryGameRepository::new(), config.strategy().build());
    let mut snapshot = service.start_game()?;
    let id = GameId::from(snapshot.game_id);
    let mut lines = io::stdin().lock().lines();

    info!(game_id = %id, "Interactive game started");

    while !snapshot.is_finished {
        let board = Board::from_player_ids(&snapshot.board_1d)?;
        println!("\n{}\n", board);

        let to_move = Player::from_id(snapshot.current_player)?;
        let position = if to_move == human {
            if *config.show_hints() {
                print_hints(&snapshot);
            }
            print!("Your move ({}), 0-8 or row,col: ", human);
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                info!("Input closed, leaving game");
                return Ok(());
            };
            let line = line?;
            match Position::parse(&line) {
                Some(position) => position,
                None => {
                    println!("Not a square: {}", line.trim());
                    continue;
                }
            }
        } else {
            let position = service
                .suggest_move(id)?
                .ok_or_else(|| anyhow!("Engine found no move on an unfinished board"))?;
            println!("Engine ({}) plays {}", to_move, position.label());
            position
        };

        match service.make_move(id, to_move.id(), position.to_index()) {
            Ok(next) => snapshot = next,
            Err(ServiceError::Game { source }) => println!("Illegal move: {}", source),
            Err(e) => return Err(e.into()),
        }
    }

    let board = Board::from_player_ids(&snapshot.board_1d)?;
    println!("\n{}\n", board);
    match snapshot.winner {
        Some(id) if id == human.id() => println!("You win!"),
        Some(_) => println!("The engine wins."),
        None => println!("Draw."),
    }
    Ok(())
}

fn print_hints(snapshot: &GameSnapshot) {
    if let Some(wins) = &snapshot.opponent_winning_moves
        && !wins.is_empty()
    {
        println!("You can win now at: {:?}", wins);
    }
    if let Some(index) = snapshot.suggested_move {
        println!("Suggested: {}", index);
    }
}

/// Prints the suggested move and immediate wins for one position.
#[instrument(skip(config, board))]
fn run_suggest(config: &EngineConfig, board: &Board, player: Player, json: bool) -> Result<()> {
    let strategy = config.strategy().build();
    let best = strategy.find_best_move(board, player);
    let wins: Vec<usize> = strategy
        .find_opponent_winning_moves(board, player)
        .into_iter()
        .map(Position::to_index)
        .collect();

    if json {
        let output = serde_json::json!({
            "board": board.player_ids(),
            "player": player.id(),
            "strategy": strategy.name(),
            "best_move": best.map(Position::to_index),
            "winning_moves": wins,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", board);
    match best {
        Some(position) => println!(
            "Best move for {}: {} {} (index {})",
            player,
            position.label(),
            position,
            position.to_index()
        ),
        None => println!("No move for {}: the board is full or already won", player),
    }
    println!("Immediate wins for {}: {:?}", player, wins);
    Ok(())
}

/// The configured strategy plays both sides of one game.
#[instrument(skip(config), fields(strategy = ?config.strategy()))]
fn run_selfplay(config: &EngineConfig) -> Result<()> {
    let strategy = config.strategy().build();
    let mut game = Game::new(GameId::from(1));

    while !game.is_finished() {
        let player = game.current_player();
        let position = strategy
            .find_best_move(game.board(), player)
            .ok_or_else(|| anyhow!("Strategy found no move on an unfinished board"))?;
        game.make_move(player, position)?;
        println!("{} plays {}\n{}\n", player, position.label(), game.board());
    }

    match game.outcome() {
        Some(outcome) => println!("{}", outcome),
        None => println!("Game unfinished"),
    }
    info!(status = %game.status(), "Self-play finished");
    Ok(())
}
