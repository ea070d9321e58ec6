//! Audio and haptic cues
//!
//! The simulation only names cues; this module turns them into simple tones
//! and hands them to whatever backend the platform provides. Playback is
//! fire-and-forget: backends never report failure back to the game.

use crate::sim::SoundEffect;

/// A single square-ish beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    /// 0.0 - 1.0
    pub volume: f32,
    pub duration_ms: u32,
}

impl Tone {
    const fn new(freq_hz: f32, volume: f32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            volume,
            duration_ms,
        }
    }
}

/// Tone for each cue
pub fn tone_for(effect: SoundEffect) -> Tone {
    match effect {
        SoundEffect::LaneChange => Tone::new(440.0, 1.0, 12),
        // Climbs 100 Hz per combo step
        SoundEffect::CoinCollect { combo } => Tone::new(1200.0 + combo as f32 * 100.0, 0.8, 25),
        SoundEffect::PowerUpCollect => Tone::new(660.0, 0.8, 40),
        SoundEffect::Crash => Tone::new(100.0, 1.0, 80),
        SoundEffect::GameOver => Tone::new(80.0, 1.0, 200),
        SoundEffect::LevelUp => Tone::new(880.0, 1.0, 40),
    }
}

/// Sound output backend
pub trait AudioSink {
    fn play(&mut self, tone: Tone);
}

/// Vibration motor backend
pub trait Haptics {
    fn vibrate(&mut self, duration_ms: u32);
}

/// Native stand-in: no speaker or motor, so cues are only logged
#[derive(Debug, Default)]
pub struct LoggedCues {
    played: u64,
}

impl LoggedCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LoggedCues {
    fn play(&mut self, tone: Tone) {
        self.played += 1;
        log::trace!(
            "beep {:.0} Hz vol {:.1} for {} ms",
            tone.freq_hz,
            tone.volume,
            tone.duration_ms
        );
    }
}

impl Haptics for LoggedCues {
    fn vibrate(&mut self, duration_ms: u32) {
        self.played += 1;
        log::trace!("vibrate {} ms", duration_ms);
    }
}
