//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, applies them to the engine as they arrive and
//! pulses gravity on a fixed timer. Rendering goes through the diffing
//! framebuffer renderer.

mod cli;
mod logging;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::core::{Game, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init_log(args.log_level, path)?;
    }

    // Dimensions are validated before the terminal switches modes.
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(args.width, args.height, seed)?,
        None => Game::new(args.width, args.height)?,
    };
    info!(
        "starting {}x{} game, seed {}, tick {}ms",
        args.width,
        args.height,
        game.seed(),
        args.tick_ms
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut game, args.tick_duration()));

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    info!("game finished with score {}", game.score());
    println!("Game Over! Your score: {}", game.score());
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut snap: GameSnapshot = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_size = (0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != last_size {
            term.invalidate();
            last_size = (w, h);
        }
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next gravity pulse.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                    }
                }
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick(None);
            if let Some(event) = game.take_last_event() {
                if event.game_over {
                    info!("game over at score {}", game.score());
                }
            }
        }
    }
}
