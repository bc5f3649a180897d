//! Cryptcrawl - Entry Point
//!
//! Initializes the terminal, carves a dungeon, and runs the turn loop until
//! the player leaves.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event;
use hecs::World;
use ratatui::{buffer::Buffer, layout::Rect};

use cryptcrawl::data::SETTINGS_PATH;
use cryptcrawl::entities::spawn_player;
use cryptcrawl::render::TerminalPresenter;
use cryptcrawl::{generate_dungeon, Engine, KeyboardHandler, Position, Settings};

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Cryptcrawl v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load_or_default(Path::new(SETTINGS_PATH));
    let mut rng = settings.rng();

    let mut start = Position::default();
    let map = generate_dungeon(&mut rng, &settings.dungeon, &mut start)
        .context("could not generate the dungeon")?;

    let mut world = World::new();
    let player = spawn_player(&mut world, start);
    let mut engine = Engine::with_fov_radius(
        world,
        KeyboardHandler::new(),
        map,
        player,
        settings.fov_radius,
    )?;

    let mut presenter = TerminalPresenter::enter()?;
    let result = run_game_loop(&mut engine, &mut presenter, &settings);
    let restored = presenter.restore();

    let result = shutdown(result, restored);
    match &result {
        Ok(()) => log::info!("Cryptcrawl shut down cleanly"),
        Err(e) => eprintln!("Error: {:#}", e),
    }
    result
}

/// Combine the game loop's outcome with the terminal restore.
///
/// Both failures are logged; the loop error is the one returned since the
/// restore failure is usually a consequence of it.
fn shutdown(result: Result<()>, restored: std::io::Result<()>) -> Result<()> {
    if let Err(e) = &result {
        log::error!("Game exited with error: {:#}", e);
    }
    if let Err(e) = &restored {
        log::error!("Could not restore the terminal: {}", e);
    }
    result.and(restored.context("could not restore the terminal"))
}

/// Log to a file so output never lands on the game screen
fn init_logging() {
    let target: Box<dyn std::io::Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("cryptcrawl.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();
}

/// Render, wait for input, repeat
fn run_game_loop(
    engine: &mut Engine<KeyboardHandler>,
    presenter: &mut TerminalPresenter,
    settings: &Settings,
) -> Result<()> {
    let mut surface = Buffer::empty(Rect::new(0, 0, settings.screen_width, settings.screen_height));

    while engine.is_running() {
        engine.render(&mut surface, presenter)?;
        // Turn-based: block until the next event
        let event = event::read()?;
        engine.handle_events(std::iter::once(event));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_shutdown_keeps_loop_error_over_restore_error() {
        let result = shutdown(
            Err(anyhow::anyhow!("input stream closed")),
            Err(io::Error::new(io::ErrorKind::Other, "restore failed")),
        );
        assert_eq!(result.unwrap_err().to_string(), "input stream closed");
    }

    #[test]
    fn test_shutdown_reports_restore_error_after_clean_loop() {
        let result = shutdown(Ok(()), Err(io::Error::new(io::ErrorKind::Other, "restore failed")));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "could not restore the terminal");
        assert_eq!(err.root_cause().to_string(), "restore failed");
    }

    #[test]
    fn test_shutdown_clean() {
        assert!(shutdown(Ok(()), Ok(())).is_ok());
    }
}
