//! `chesskers` - play the hybrid chess/checkers game from a terminal
//!
//! Reads one command per line from stdin (or `--script`), drives a
//! [`TurnEngine`] and prints the board plus the events each command produced.

mod cli;

use anyhow::{Context, Result};
use chesskers::core::{init_logging, EngineSettings};
use chesskers::game::{GameEvent, TurnEngine};
use clap::Parser;
use cli::{parse_command, Command, HELP};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

/// Hybrid chess/checkers rules engine with a text front-end.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file (defaults to settings.json in the platform config dir)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write default settings to the settings path and exit
    #[arg(long, default_value_t = false)]
    write_settings: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print engine events as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings_path = args.settings.clone().unwrap_or_else(EngineSettings::default_path);

    if args.write_settings {
        init_logging("info");
        EngineSettings::default()
            .save(&settings_path)
            .with_context(|| format!("writing settings to {}", settings_path.display()))?;
        println!("wrote default settings to {}", settings_path.display());
        return Ok(());
    }

    let settings = EngineSettings::load_or_default(&settings_path);
    init_logging(&settings.log_filter);

    let mut engine = settings
        .build_engine()
        .context("settings contain an unusable starting layout")?;

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "{}", engine.board())?;
        writeln!(out, "{} to move. Type `help` for commands.", engine.current_team())?;
    }

    for line in input.lines() {
        let line = line.context("reading command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(e) = run_command(&mut engine, command, &mut out) {
            writeln!(out, "error: {e}")?;
        }
        print_events(&mut out, engine.drain_events(), args.json)?;
    }

    info!("[GAME] Session ended after {} moves", engine.history().len());
    Ok(())
}

fn run_command(engine: &mut TurnEngine, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Select(square) => {
            let moves = engine.select_piece(square)?;
            writeln!(out, "{} can move to {}", square, format_squares(&moves))?;
        }
        Command::Move(square) => {
            let outcome = engine.move_to(square)?;
            writeln!(out, "{}", engine.board())?;
            if outcome.chain_capture {
                writeln!(out, "{} must capture again", outcome.piece)?;
            }
        }
        Command::Moves(square) => {
            let moves = engine.legal_moves_for(square)?;
            writeln!(out, "{}: {}", square, format_squares(&moves))?;
        }
        Command::Deselect => engine.deselect()?,
        Command::Board => writeln!(out, "{}", engine.board())?,
        Command::Status => {
            writeln!(
                out,
                "{} | {:?} | move {} | checkers captured {}/{}",
                if engine.game_over().is_game_over() {
                    engine.game_over().message()
                } else {
                    format!("{} to move", engine.current_team())
                },
                engine.phase(),
                engine.turn().move_number,
                engine.captured_checkers_count(),
                engine.checkers_total(),
            )?;
        }
        Command::History => {
            for (i, record) in engine.history().moves.iter().enumerate() {
                write!(out, "{:>3}. {} {} {} -> {}", i + 1, record.team, record.kind, record.from, record.to)?;
                if let Some(captured) = record.captured {
                    write!(out, " x{}", captured)?;
                }
                if let Some(promoted) = record.promoted_to {
                    write!(out, " ={}", promoted)?;
                }
                writeln!(out)?;
            }
        }
        Command::Reset => {
            engine.reset()?;
            writeln!(out, "{}", engine.board())?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_events(out: &mut impl Write, events: Vec<GameEvent>, json: bool) -> Result<()> {
    for event in events {
        if json {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
            continue;
        }
        match event {
            GameEvent::PieceCaptured { piece, at } => writeln!(out, "captured {} on {}", piece.kind, at)?,
            GameEvent::PiecePromoted { old_piece, new_piece } => {
                writeln!(out, "{} promoted to {}", old_piece.kind, new_piece.kind)?
            }
            GameEvent::TurnChanged { new_team } => writeln!(out, "{} to move", new_team)?,
            GameEvent::GameEnded { winning_team, reason } => {
                writeln!(out, "game over: {} wins ({})", winning_team, reason)?
            }
            GameEvent::GameReset => writeln!(out, "board reset")?,
            GameEvent::SelectionChanged { .. }
            | GameEvent::PieceMoved { .. }
            | GameEvent::ChainCaptureContinues { .. } => {}
        }
    }
    Ok(())
}

fn format_squares(squares: &[chesskers::game::Position]) -> String {
    if squares.is_empty() {
        return "nowhere".to_string();
    }
    squares
        .iter()
        .map(|sq| sq.to_algebraic().unwrap_or_else(|| sq.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
