use std::io;

use bounce_physics::game::prompt;
use bounce_physics::SessionConfig;
use ggez::{conf, event, ContextBuilder, GameError};
use thiserror::Error;

mod pacing;
mod visual;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Setup(#[from] bounce_physics::Error),
    #[error("graphics error: {0}")]
    Graphics(#[from] GameError),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = SessionConfig::default();

    // Frame pacing is done by hand, so vsync stays off
    let cb = ContextBuilder::new("bouncing_balls", "bounce_physics")
        .window_setup(conf::WindowSetup::default().title(config.window_title).vsync(false))
        .window_mode(
            conf::WindowMode::default().dimensions(config.arena_width as f32, config.arena_height as f32),
        );
    let (ctx, event_loop) = cb.build()?;

    let choices = prompt::read_choices(io::stdin().lock(), io::stdout())?;
    log::info!("material choices: {:?}", choices);

    let state = visual::MainState::new(config, choices);
    event::run(ctx, event_loop, state)
}
