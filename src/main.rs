//! Line-oriented tile games runner (default binary).
//!
//! ```text
//! tile-games merge|blocks [--seed N]
//! ```
//!
//! Reads one line at a time from stdin and prints the resulting board after
//! each line. A line holds whitespace-separated tokens:
//!
//! - a command token (`moveLeft`, `rotate`, `undo`, ...) or a key character
//! - `press KEY` / `release KEY`: held keys with auto-repeat (blocks)
//! - `tick [N]`: deliver N gravity ticks (blocks)
//! - `wait MS`: let MS milliseconds pass for repeats and gravity (blocks)
//! - `q` / `quit`: exit
//!
//! Merge-grid history is saved after every committed move and restored on
//! the next start.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use tile_games::adapter::{HistoryStore, LoadOutcome, SaveOutcome, StoreConfig};
use tile_games::core::{FallingConfig, FallingGame, MergeConfig, SimpleRng};
use tile_games::engine::{Driver, MergeSession, Reducer};
use tile_games::input::{map_key, should_quit, InputHandler};
use tile_games::types::{Command, TICK_MS};
use tile_games::view::{render_falling, render_session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Merge,
    Blocks,
}

struct Args {
    mode: Mode,
    seed: u32,
}

fn parse_args() -> Result<Args> {
    let mut mode = None;
    let mut seed = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "merge" => mode = Some(Mode::Merge),
            "blocks" => mode = Some(Mode::Blocks),
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                seed = Some(value.parse::<u32>().with_context(|| format!("invalid seed: {}", value))?);
            }
            other => bail!("unknown argument: {} (usage: tile-games merge|blocks [--seed N])", other),
        }
    }
    let Some(mode) = mode else {
        bail!("usage: tile-games merge|blocks [--seed N]");
    };
    Ok(Args {
        mode,
        seed: seed.unwrap_or_else(clock_seed),
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// A command token or a single key character
fn parse_command(token: &str) -> Option<Command> {
    Command::from_str(token).or_else(|| {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => map_key(key),
            _ => None,
        }
    })
}

fn is_quit(token: &str) -> bool {
    token.eq_ignore_ascii_case("quit") || (token.chars().count() == 1 && token.chars().all(should_quit))
}

fn main() -> Result<()> {
    let args = parse_args()?;
    println!("[Runner] {:?} seed {}", args.mode, args.seed);
    match args.mode {
        Mode::Merge => run_merge(args.seed),
        Mode::Blocks => run_blocks(args.seed),
    }
}

fn run_merge(seed: u32) -> Result<()> {
    let config = StoreConfig::from_env();
    let mut store = HistoryStore::from_config(&config);
    let entries = match store.load() {
        LoadOutcome::Loaded(entries) => {
            println!("[Runner] Restored {} history entries", entries.len());
            entries
        }
        LoadOutcome::Empty | LoadOutcome::Unavailable => Vec::new(),
    };

    let rng = SimpleRng::new(seed);
    let mut session = match MergeSession::from_history(MergeConfig::default(), entries, rng.clone()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("[Runner] Stored history unusable ({}), starting fresh", e);
            MergeSession::new(MergeConfig::default(), rng)
        }
    };
    store.save(session.history());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_session(&session.snapshot()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let mut changed = false;
        for token in line.split_whitespace() {
            if is_quit(token) {
                return Ok(());
            }
            match parse_command(token) {
                Some(command) => changed |= session.apply(command),
                None => eprintln!("[Runner] Ignoring unknown token: {}", token),
            }
        }
        if changed && store.save(session.history()) == SaveOutcome::Unavailable {
            eprintln!("[Runner] History not saved");
        }
        write!(out, "{}", render_session(&session.snapshot()))?;
        out.flush()?;
    }
    Ok(())
}

fn run_blocks(seed: u32) -> Result<()> {
    let game = FallingGame::new(FallingConfig::default(), SimpleRng::new(seed));
    let mut driver = Driver::new(game);
    let mut input = InputHandler::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_falling(&driver.snapshot()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            if is_quit(token) {
                return Ok(());
            }
            match token {
                "tick" => {
                    let count: u32 = tokens.next().and_then(|n| n.parse().ok()).unwrap_or(1);
                    for _ in 0..count {
                        driver.game_mut().tick();
                    }
                }
                "wait" => {
                    let ms: u32 = tokens.next().and_then(|n| n.parse().ok()).unwrap_or(TICK_MS);
                    advance(&mut driver, &mut input, ms);
                }
                "press" | "release" => {
                    let Some(command) = tokens.next().and_then(parse_command) else {
                        eprintln!("[Runner] {} needs a key", token);
                        continue;
                    };
                    let issued = if token == "press" {
                        input.handle_press(command)
                    } else {
                        input.handle_release(command)
                    };
                    if let Some(command) = issued {
                        driver.command(command);
                    }
                }
                _ => match parse_command(token) {
                    Some(command) => {
                        if matches!(command, Command::Pause | Command::Restart) {
                            if let Some(release) = input.reset() {
                                driver.command(release);
                            }
                        }
                        driver.command(command);
                    }
                    None => eprintln!("[Runner] Ignoring unknown token: {}", token),
                },
            }
        }
        write!(out, "{}", render_falling(&driver.snapshot()))?;
        out.flush()?;
    }
    Ok(())
}

/// Let `ms` pass one tick interval at a time, repeats before gravity
fn advance(driver: &mut Driver<FallingGame<SimpleRng>>, input: &mut InputHandler, ms: u32) {
    let mut remaining = ms;
    while remaining > 0 {
        let slice = remaining.min(TICK_MS);
        for command in input.update(slice) {
            driver.command(command);
        }
        driver.advance(slice);
        remaining -= slice;
    }
}
