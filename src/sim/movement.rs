//! Per-tick movement and off-screen retirement

use super::rng::SimRng;
use super::state::GameState;
use crate::consts::SCREEN_H;
use crate::tuning::{OBSTACLE_PASSED_BONUS, SCENERY_SPEED, fall_speed};

/// Scenery recycles once this far past the bottom edge
const SCENERY_EXIT_MARGIN: i32 = 5;
/// Recycled scenery re-enters up to this far above the top edge
const SCENERY_REENTRY_SPREAD: u32 = 20;

/// Move every live entity one tick down the screen
pub fn advance_entities(state: &mut GameState, rng: &mut impl SimRng) {
    advance_scenery(state, rng);
    advance_obstacles(state);
    advance_pickups(state);
}

/// Scenery is never destroyed: anything past the bottom wraps back above the top
pub fn advance_scenery(state: &mut GameState, rng: &mut impl SimRng) {
    for item in &mut state.scenery {
        item.y += SCENERY_SPEED;
        if item.y > SCREEN_H + SCENERY_EXIT_MARGIN {
            item.y = -(rng.below(SCENERY_REENTRY_SPREAD) as i32);
            item.reroll(rng);
        }
    }
}

/// Move obstacles and retire the ones that got past, awarding the dodge bonus
pub fn advance_obstacles(state: &mut GameState) {
    let speed = fall_speed(state.level);
    let mut passed = 0u32;

    state.obstacles.retain(|obs| {
        let shape = obs.kind.shape();
        obs.y += speed + shape.speed_delta;
        if obs.y > SCREEN_H + shape.exit_margin {
            passed += 1;
            false
        } else {
            true
        }
    });

    if passed > 0 {
        state.score = state
            .score
            .saturating_add(passed * OBSTACLE_PASSED_BONUS);
    }
}

/// Coins and power-ups fall at the base speed and vanish without score
pub fn advance_pickups(state: &mut GameState) {
    let speed = fall_speed(state.level);
    state.coins.retain(|coin| {
        coin.y += speed;
        coin.y <= SCREEN_H
    });
    state.powerups.retain(|p| {
        p.y += speed;
        p.y <= SCREEN_H
    });
}

/// Drift and age crash particles
pub fn advance_particles(state: &mut GameState) {
    for p in state.particles.iter_mut().filter(|p| p.is_alive()) {
        p.pos += p.vel;
        p.life -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;
    use crate::sim::state::{Coin, Obstacle, ObstacleKind, PowerUp, PowerUpKind};
    use crate::tuning::Difficulty;
    use glam::IVec2;

    fn playing() -> GameState {
        let mut state = GameState::new(Difficulty::Normal, 0);
        state.start_run(&mut ScriptedRng::default());
        state
    }

    #[test]
    fn test_obstacle_speeds_by_kind() {
        let mut state = playing();
        state.level = 4; // base speed 5
        for kind in [ObstacleKind::Moto, ObstacleKind::Sedan, ObstacleKind::Truck] {
            state.obstacles.spawn(Obstacle { lane: 1, y: 0, kind });
        }
        advance_obstacles(&mut state);
        let ys: Vec<i32> = state.obstacles.iter().map(|(_, o)| o.y).collect();
        assert_eq!(ys, vec![6, 5, 4]);
    }

    #[test]
    fn test_passed_obstacle_awards_bonus() {
        let mut state = playing();
        state.obstacles.spawn(Obstacle {
            lane: 0,
            y: SCREEN_H + 10,
            kind: ObstacleKind::Sedan,
        });
        // Truck needs more room before it counts as gone
        state.obstacles.spawn(Obstacle {
            lane: 1,
            y: SCREEN_H + 10,
            kind: ObstacleKind::Truck,
        });
        advance_obstacles(&mut state);
        assert_eq!(state.obstacles.live_count(), 1);
        assert_eq!(state.score, OBSTACLE_PASSED_BONUS);
    }

    #[test]
    fn test_pickups_retire_without_score() {
        let mut state = playing();
        state.coins.spawn(Coin { lane: 0, y: SCREEN_H - 1 });
        state.powerups.spawn(PowerUp {
            lane: 2,
            y: SCREEN_H - 2,
            kind: PowerUpKind::Fuel,
        });
        advance_pickups(&mut state);
        assert_eq!(state.coins.live_count(), 0);
        assert_eq!(state.powerups.live_count(), 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_scenery_recycles_above_top() {
        let mut state = playing();
        state.scenery[0].y = SCREEN_H + SCENERY_EXIT_MARGIN;
        let mut rng = ScriptedRng::new([7, 1, 1]);
        advance_scenery(&mut state, &mut rng);
        assert_eq!(state.scenery[0].y, -7);
        assert_eq!(state.scenery[0].side, crate::sim::state::Side::Right);
        assert_eq!(state.scenery.len(), crate::consts::MAX_SCENERY);
    }

    #[test]
    fn test_particles_expire() {
        let mut state = playing();
        state.particles[0].pos = IVec2::new(10, 10);
        state.particles[0].vel = IVec2::new(1, -2);
        state.particles[0].life = 2;
        advance_particles(&mut state);
        assert_eq!(state.particles[0].pos, IVec2::new(11, 8));
        advance_particles(&mut state);
        assert!(!state.particles[0].is_alive());
        // Dead particles stay put
        advance_particles(&mut state);
        assert_eq!(state.particles[0].pos, IVec2::new(12, 6));
    }
}
