//! Lane Rush entry point
//!
//! Loads settings and the stored best score, starts the tick timer and the
//! keyboard reader, then runs the event loop on the main thread.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use lane_rush::app::App;
use lane_rush::audio::LoggedCues;
use lane_rush::platform::{EventQueue, TickTimer, input};
use lane_rush::renderer::text::TextRenderer;
use lane_rush::{Game, HighScoreStore, Settings};

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load(Settings::locate(std::env::args().nth(1)).as_deref());
    let store = HighScoreStore::new(&settings.high_score_path);
    let high_score = store.load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Starting Lane Rush (seed {}, best {})", seed, high_score);

    let game = Game::from_settings(&settings, high_score, seed);

    let queue = EventQueue::bounded(settings.event_queue_capacity);
    let timer = TickTimer::spawn(queue.sender()).context("failed to start tick timer")?;
    // Detached: blocked on stdin until the process exits
    input::spawn_stdin_reader(queue.sender()).context("failed to start input reader")?;

    let events = queue.receiver();
    // Only the producers should hold senders
    drop(queue);

    let mut app = App::new(
        game,
        timer,
        store,
        LoggedCues::new(),
        LoggedCues::new(),
        TextRenderer::new(io::stdout()),
    );
    app.run(&events);

    log::info!("Goodbye");
    Ok(())
}
