//! Requests the simulation makes of the outside world
//!
//! The core never touches audio, vibration, timers or storage directly. It
//! appends an [`Effect`] to an outbox and the event loop carries it out.

/// Named audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    LaneChange,
    /// Pitch rises with the combo count
    CoinCollect { combo: u8 },
    PowerUpCollect,
    Crash,
    GameOver,
    LevelUp,
}

/// Commands for the periodic tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// (Re)start ticking at this period; applies from the next tick on
    Start { interval_ms: u32 },
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundEffect),
    Vibrate { ms: u32 },
    Timer(TimerCommand),
    /// The run just ended with a new best score
    SaveHighScore(u32),
    /// Leave the event loop
    Quit,
}

/// Haptic durations (ms)
pub const CRASH_VIBRATE_MS: u32 = 80;
pub const GAME_OVER_VIBRATE_MS: u32 = 200;
