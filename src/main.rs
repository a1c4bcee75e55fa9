//! Terminal snake runner (default binary).
//!
//! Shows the game's pixel display in the terminal and steers the snake from
//! terminal key presses (or, with `SNAKE_INPUT=lines`, one token per line on
//! stdin). All settings come from `SNAKE_*` environment variables; see
//! [`SnakeConfig`].

use std::fs::File;
use std::io::{self, BufReader};
use std::thread;

use anyhow::{Context, Result};
use log::{info, warn};
use simplelog::{Config, WriteLogger};
use tokio::runtime::Runtime;

use tui_snake::core::{Canvas, GameState, Layout};
use tui_snake::engine::{Display, End, Engine, FatalFrame, InputMode, Outcome, SnakeConfig};
use tui_snake::input::{BufReadSource, InputSampler, Interrupt, KeySource};
use tui_snake::term::TerminalCanvas;

fn main() -> Result<()> {
    let (config, fallbacks) = SnakeConfig::from_env();
    let logging = init_logging(&config)?;
    for fallback in &fallbacks {
        if logging {
            warn!("{}", fallback);
        } else {
            eprintln!("tui-snake: {}", fallback);
        }
    }
    config.validate()?;

    let rt = Runtime::new().context("failed to create tokio runtime")?;
    let interrupt = Interrupt::new();
    rt.spawn(watch_signals(interrupt.clone()));

    let mut canvas = TerminalCanvas::new(config.display_width, config.display_height);
    canvas.enter()?;

    let result = run(&config, &rt, &interrupt, &mut canvas);

    // Always try to blank the display and restore terminal state.
    canvas.clear();
    let _ = canvas.present();
    let _ = canvas.exit();

    // Stops the key reader; a reader blocked on stdin is left behind.
    interrupt.raise();
    rt.shutdown_background();

    let outcome = result?;
    match outcome.end {
        End::Dead(cause) => println!(
            "snake died ({}) after {} ticks",
            cause.as_str(),
            outcome.ticks
        ),
        End::Interrupted => println!("stopped after {} ticks", outcome.ticks),
    }
    Ok(())
}

fn run(
    config: &SnakeConfig,
    rt: &Runtime,
    interrupt: &Interrupt,
    canvas: &mut TerminalCanvas,
) -> Result<Outcome> {
    let layout = Layout::from_canvas(&*canvas, config.segment_size as i32);
    let state =
        GameState::new(layout, config.length).context("snake does not fit on the display")?;

    let sampler = match config.input {
        InputMode::Keys => InputSampler::spawn(rt.handle(), KeySource::new(interrupt.clone())),
        InputMode::Lines => {
            InputSampler::spawn(rt.handle(), BufReadSource::new(BufReader::new(io::stdin())))
        }
    };

    let mut engine = Engine::new(state, canvas, sampler, interrupt.clone())
        .with_tick(config.tick)
        .with_fatal_frame(config.fatal_frame);
    let outcome = engine.run()?;

    // Leave the fatal frame up for one tick so it can actually be seen.
    if matches!(outcome.end, End::Dead(_))
        && config.fatal_frame == FatalFrame::Render
        && !interrupt.is_raised()
    {
        thread::sleep(config.tick);
    }
    Ok(outcome)
}

/// Install the file logger. Returns whether one was installed.
fn init_logging(config: &SnakeConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;
    WriteLogger::init(config.log_level, Config::default(), file)?;
    info!("tui-snake starting with {:?}", config);
    Ok(true)
}

async fn watch_signals(interrupt: Interrupt) {
    match wait_for_signal().await {
        Ok(()) => {
            info!("termination signal received");
            interrupt.raise();
        }
        Err(e) => warn!("cannot listen for termination signals: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<()> {
    tokio::signal::ctrl_c().await
}
