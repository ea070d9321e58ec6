//! Level and tick-rate progression

use super::effects::{Effect, SoundEffect, TimerCommand};
use super::state::GameState;
use crate::tuning::{MAX_LEVEL, SCORE_PER_LEVEL};

/// Level implied by a score: `min(score / 200, 9)`
pub fn level_for_score(score: u32) -> u8 {
    (score / SCORE_PER_LEVEL).min(MAX_LEVEL as u32) as u8
}

/// Raise the level if the score has earned it, speeding up the tick source.
///
/// The level only ever goes up. Returns true on a level-up.
pub fn update_progression(state: &mut GameState, out: &mut Vec<Effect>) -> bool {
    let earned = level_for_score(state.score);
    if earned <= state.level {
        return false;
    }

    state.level = earned;
    state.interval_ms = state.difficulty.interval_for_level(earned);
    out.push(Effect::Timer(TimerCommand::Start {
        interval_ms: state.interval_ms,
    }));
    out.push(Effect::Sound(SoundEffect::LevelUp));
    log::info!(
        "level up: {} (tick interval {} ms)",
        state.level + 1,
        state.interval_ms
    );
    true
}
