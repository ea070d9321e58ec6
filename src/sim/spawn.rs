//! Cadence-driven spawning
//!
//! Spawns are keyed purely off the tick counter. A full pool swallows the
//! request silently.

use super::rng::SimRng;
use super::state::{Coin, GameState, Obstacle, ObstacleKind, PowerUp, PowerUpKind};
use crate::consts::LANE_COUNT;
use crate::tuning::{
    BOSS_LEVEL_MULTIPLE, BOSS_TRUCK_ODDS, COIN_CADENCE, MOTO_ODDS, POWERUP_CADENCE,
};

/// Spawn height for obstacles (just above the top edge)
pub const OBSTACLE_SPAWN_Y: i32 = -18;
/// Spawn height for coins and power-ups
pub const PICKUP_SPAWN_Y: i32 = -12;
/// Boss trucks always run down the middle
pub const TRUCK_LANE: u8 = 1;

pub fn run_spawner(state: &mut GameState, rng: &mut impl SimRng) {
    let tick = state.tick_count;
    if tick % state.difficulty.tuning().obstacle_cadence == 0 {
        spawn_obstacle(state, rng);
    }
    if tick % COIN_CADENCE == 0 {
        spawn_coin(state, rng);
    }
    if tick % POWERUP_CADENCE == 0 {
        spawn_powerup(state, rng);
    }
}

fn is_boss_level(level: u8) -> bool {
    level > 0 && level % BOSS_LEVEL_MULTIPLE == 0
}

pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl SimRng) {
    if state.obstacles.is_full() {
        return;
    }
    let mut lane = rng.below(LANE_COUNT as u32) as u8;
    let kind = if is_boss_level(state.level) && rng.one_in(BOSS_TRUCK_ODDS) {
        lane = TRUCK_LANE;
        ObstacleKind::Truck
    } else if rng.one_in(MOTO_ODDS) {
        ObstacleKind::Moto
    } else {
        ObstacleKind::Sedan
    };

    if let Some(slot) = state.obstacles.spawn(Obstacle {
        lane,
        y: OBSTACLE_SPAWN_Y,
        kind,
    }) {
        log::debug!("spawned {:?} in lane {} (slot {})", kind, lane, slot);
    }
}

pub fn spawn_coin(state: &mut GameState, rng: &mut impl SimRng) {
    if state.coins.is_full() {
        return;
    }
    let lane = rng.below(LANE_COUNT as u32) as u8;
    state.coins.spawn(Coin {
        lane,
        y: PICKUP_SPAWN_Y,
    });
}

pub fn spawn_powerup(state: &mut GameState, rng: &mut impl SimRng) {
    if state.powerups.is_full() {
        return;
    }
    let lane = rng.below(LANE_COUNT as u32) as u8;
    let kind = PowerUpKind::ALL[rng.below(PowerUpKind::ALL.len() as u32) as usize];
    if let Some(slot) = state.powerups.spawn(PowerUp {
        lane,
        y: PICKUP_SPAWN_Y,
        kind,
    }) {
        log::debug!("spawned {:?} power-up in lane {} (slot {})", kind, lane, slot);
    }
}
