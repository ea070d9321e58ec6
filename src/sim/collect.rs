//! Coin and power-up collection, combo scoring and magnet pull

use super::collision::{pickup_hitbox, player_hitbox};
use super::effects::{Effect, SoundEffect};
use super::state::{GameState, PowerUpKind};
use crate::consts::{MAX_LIVES, PLAYER_Y};
use crate::tuning::{
    COIN_POINTS, COMBO_DISPLAY_TICKS, MAGNET_PULL_STEP, MAGNET_RANGE, MAGNET_TICKS, SHIELD_TICKS,
};

/// Points for a coin given the combo count after it was collected
pub fn coin_points(combo: u8) -> u32 {
    COIN_POINTS * combo.max(1) as u32
}

pub fn resolve_collections(state: &mut GameState, out: &mut Vec<Effect>) {
    collect_coins(state, out);
    collect_powerups(state, out);
}

/// Touching coins are collected; with a magnet active, nearby coins that are
/// not yet touching are dragged one step toward the player instead.
pub fn collect_coins(state: &mut GameState, out: &mut Vec<Effect>) {
    let player = player_hitbox(state.player_lane);
    let player_lane = state.player_lane;
    let magnet = state.timers.magnet > 0;
    let mut collected = 0u32;

    state.coins.retain(|coin| {
        let touching = pickup_hitbox(coin.lane, coin.y).overlaps(&player);
        if touching {
            collected += 1;
            return false;
        }
        if magnet && (coin.y - PLAYER_Y).abs() < MAGNET_RANGE {
            coin.y += if coin.y < PLAYER_Y {
                MAGNET_PULL_STEP
            } else {
                -MAGNET_PULL_STEP
            };
            if coin.lane < player_lane {
                coin.lane += 1;
            } else if coin.lane > player_lane {
                coin.lane -= 1;
            }
        }
        true
    });

    for _ in 0..collected {
        state.combo = state.combo.saturating_add(1);
        state.timers.combo_display = COMBO_DISPLAY_TICKS;
        state.score = state.score.saturating_add(coin_points(state.combo));
        out.push(Effect::Sound(SoundEffect::CoinCollect { combo: state.combo }));
    }
}

pub fn collect_powerups(state: &mut GameState, out: &mut Vec<Effect>) {
    let player = player_hitbox(state.player_lane);
    let mut picked = Vec::new();

    state.powerups.retain(|p| {
        if pickup_hitbox(p.lane, p.y).overlaps(&player) {
            picked.push(p.kind);
            false
        } else {
            true
        }
    });

    for kind in picked {
        out.push(Effect::Sound(SoundEffect::PowerUpCollect));
        apply_powerup(state, kind);
    }
}

pub fn apply_powerup(state: &mut GameState, kind: PowerUpKind) {
    log::debug!("collected {:?} at tick {}", kind, state.tick_count);
    match kind {
        PowerUpKind::Shield => state.timers.shield = SHIELD_TICKS,
        PowerUpKind::Magnet => state.timers.magnet = MAGNET_TICKS,
        PowerUpKind::Fuel => {
            if state.lives < MAX_LIVES {
                state.lives += 1;
            }
        }
    }
}
