//! Hitboxes and obstacle collision resolution
//!
//! Everything here is axis-aligned: a hit means both the X and Y ranges
//! overlap strictly (touching edges do not count).

use glam::IVec2;

use super::effects::{
    CRASH_VIBRATE_MS, Effect, GAME_OVER_VIBRATE_MS, SoundEffect, TimerCommand,
};
use super::rng::SimRng;
use super::state::{GameMode, GameState, Obstacle, Particle};
use crate::consts::*;
use crate::tuning::INVINCIBLE_TICKS;
use crate::car_left_x;

/// Coin and power-up hitbox edge length
pub const PICKUP_SIZE: i32 = 8;

/// Axis-aligned box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub min: IVec2,
    pub size: IVec2,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

pub fn player_hitbox(lane: u8) -> Hitbox {
    Hitbox::new(car_left_x(lane), PLAYER_Y, CAR_W, CAR_H)
}

pub fn obstacle_hitbox(obs: &Obstacle) -> Hitbox {
    let shape = obs.kind.shape();
    Hitbox::new(
        car_left_x(obs.lane) + shape.x_offset,
        obs.y,
        shape.width,
        shape.height,
    )
}

/// Coins and power-ups share one 8x8 box anchored at the lane's car edge
pub fn pickup_hitbox(lane: u8, y: i32) -> Hitbox {
    Hitbox::new(car_left_x(lane), y, PICKUP_SIZE, PICKUP_SIZE)
}

/// First live obstacle (in slot order) overlapping the player
///
/// When several overlap, the lowest slot wins; which obstacle that is depends
/// on allocation history.
pub fn find_collision(state: &GameState) -> Option<usize> {
    let player = player_hitbox(state.player_lane);
    state
        .obstacles
        .iter()
        .find(|(_, obs)| obstacle_hitbox(obs).overlaps(&player))
        .map(|(i, _)| i)
}

/// Overwrite every particle slot with a fresh burst centred on `origin`
pub fn burst_particles(state: &mut GameState, origin: IVec2, rng: &mut impl SimRng) {
    for p in &mut state.particles {
        *p = Particle {
            pos: origin,
            vel: IVec2::new(rng.range_inclusive(-3, 3), rng.range_inclusive(-3, 3)),
            life: rng.range_inclusive(8, 12) as u8,
        };
    }
}

/// Result of the collision pass for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing hit, or the player was protected
    Clear,
    /// A life was lost; the run continues
    Hit { slot: usize },
    /// The last life was lost; the rest of the tick is skipped
    GameOver { slot: usize },
}

/// Apply at most one obstacle hit to the player
pub fn resolve_collision(
    state: &mut GameState,
    rng: &mut impl SimRng,
    out: &mut Vec<Effect>,
) -> CollisionOutcome {
    if state.timers.is_protected() {
        return CollisionOutcome::Clear;
    }
    let Some(slot) = find_collision(state) else {
        return CollisionOutcome::Clear;
    };

    state.lives = state.lives.saturating_sub(1);
    state.combo = 0;
    let origin = player_hitbox(state.player_lane).center();
    burst_particles(state, origin, rng);
    out.push(Effect::Vibrate {
        ms: CRASH_VIBRATE_MS,
    });
    out.push(Effect::Sound(SoundEffect::Crash));
    log::debug!(
        "hit obstacle in slot {} at tick {}, lives left {}",
        slot,
        state.tick_count,
        state.lives
    );

    if state.lives == 0 {
        end_run(state, out);
        return CollisionOutcome::GameOver { slot };
    }

    state.timers.invincible = INVINCIBLE_TICKS;
    CollisionOutcome::Hit { slot }
}

fn end_run(state: &mut GameState, out: &mut Vec<Effect>) {
    state.mode = GameMode::GameOver;
    out.push(Effect::Timer(TimerCommand::Stop));
    out.push(Effect::Vibrate {
        ms: GAME_OVER_VIBRATE_MS,
    });
    out.push(Effect::Sound(SoundEffect::GameOver));
    log::info!(
        "run over: score {} level {} (best {})",
        state.score,
        state.level + 1,
        state.high_score
    );

    if state.score > state.high_score {
        state.high_score = state.score;
        out.push(Effect::SaveHighScore(state.score));
    }
}
