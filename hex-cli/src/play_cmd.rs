//! Play command - run one game from the terminal or a move script
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), play_session()
//! - Level 3: prompt_move(), apply_move()
//! - Level 4: parsing and formatting utilities

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hex_core::{render_board, Coord, Game, GameConfig, Player, WinRule};

const INVALID_POSITION: &str = "This position is invalid!";

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board side length (overrides the config file)
    #[arg(long)]
    pub size: Option<u8>,

    /// Player moving first: red or blue
    #[arg(long)]
    pub first: Option<Player>,

    /// Win rule: connectivity or frontier
    #[arg(long)]
    pub rule: Option<WinRule>,

    /// Game config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read moves from a file instead of stdin (one "i j" pair per line)
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Build the game config
/// 2. Play until someone wins or input runs out
pub fn run(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut game = Game::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let winner = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open move script: {}", path.display()))?;
            play_session(&mut game, BufReader::new(file), &mut out)?
        }
        None => play_session(&mut game, io::stdin().lock(), &mut out)?,
    };

    match winner {
        Some(player) => tracing::info!("{} won after {} moves", player, game.moves_played()),
        None => tracing::info!("Game unfinished after {} moves", game.moves_played()),
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the config file (if any) and apply command-line overrides
fn build_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(player) = args.first {
        config.first_player = player;
    }
    if let Some(rule) = args.rule {
        config.win_rule = rule;
    }

    config.validate()?;
    Ok(config)
}

/// Prompt, read and apply moves until the game is decided
///
/// Returns the winner, or None if the input ends first.
fn play_session<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> Result<Option<Player>> {
    writeln!(
        out,
        "Welcome to Hex game. {} ({}) moves first, {} ({}) second.",
        game.current_player(),
        game.current_player().marker(),
        game.current_player().opponent(),
        game.current_player().opponent().marker(),
    )?;
    writeln!(out)?;
    write!(out, "{}", render_board(game.board()))?;

    let mut lines = input.lines();

    loop {
        let Some(coord) = prompt_move(game.current_player(), &mut lines, out)? else {
            writeln!(out)?;
            writeln!(out, "Input ended before a winner was decided.")?;
            return Ok(None);
        };

        if let Some(winner) = apply_move(game, coord, out)? {
            return Ok(Some(winner));
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Read lines until one parses as a move; None at end of input
fn prompt_move<B: BufRead, W: Write>(
    player: Player,
    lines: &mut io::Lines<B>,
    out: &mut W,
) -> Result<Option<Coord>> {
    loop {
        write!(out, "{}({}) enter a position (i j): ", player, player_letter(player))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read move")?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            writeln!(out)?;
            continue;
        }

        match parse_move(line) {
            Some(coord) => return Ok(Some(coord)),
            None => {
                tracing::debug!(input = line, "Unparsable move");
                writeln!(out)?;
                writeln!(out, "{}", INVALID_POSITION)?;
            }
        }
    }
}

/// Play one move and redraw; returns the winner if the move decided the game
fn apply_move<W: Write>(game: &mut Game, coord: Coord, out: &mut W) -> Result<Option<Player>> {
    let result = match game.play(coord) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected move");
            writeln!(out)?;
            writeln!(out, "{}", INVALID_POSITION)?;
            return Ok(None);
        }
    };

    writeln!(out)?;
    write!(out, "{}", render_board(game.board()))?;

    let Some(winner) = result.winner() else {
        writeln!(out)?;
        return Ok(None);
    };

    writeln!(out, "Winner: {}", winner)?;
    if let Some(path) = game.winning_path() {
        writeln!(out, "Winning path: {}", format_path(&path))?;
    }
    Ok(Some(winner))
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Parse a 1-based "i j" (or "i,j") pair into a coordinate
fn parse_move(line: &str) -> Option<Coord> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let i: u8 = parts.next()?.parse().ok()?;
    let j: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Coord::new(i.checked_sub(1)?, j.checked_sub(1)?))
}

fn player_letter(player: Player) -> char {
    match player {
        Player::Red => 'R',
        Player::Blue => 'B',
    }
}

/// Format a path with the same 1-based numbering players type
fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(|c| format!("({} {})", c.x + 1, c.y + 1))
        .collect::<Vec<_>>()
        .join(" -> ")
}
