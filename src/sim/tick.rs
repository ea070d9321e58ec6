//! Fixed timestep simulation tick
//!
//! One call advances a `Playing` run by exactly one step:
//! timers, particles, movement, spawning, collection, collision, progression.

use super::collect::resolve_collections;
use super::collision::{CollisionOutcome, resolve_collision};
use super::effects::Effect;
use super::movement::{advance_entities, advance_particles};
use super::progression::update_progression;
use super::rng::SimRng;
use super::spawn::run_spawner;
use super::state::GameState;
use crate::consts::{DASH_TOTAL, ROAD_SCROLL_STEP};

/// Advance the simulation by one tick. Outside `Playing` this does nothing.
pub fn tick(state: &mut GameState, rng: &mut impl SimRng, out: &mut Vec<Effect>) {
    if !state.is_playing() {
        return;
    }

    state.tick_count += 1;
    state.road_scroll = (state.road_scroll + ROAD_SCROLL_STEP) % DASH_TOTAL;
    state.timers.tick_down();
    log::trace!("tick {} score {}", state.tick_count, state.score);

    advance_particles(state);
    advance_entities(state, rng);
    run_spawner(state, rng);
    resolve_collections(state, out);

    if let CollisionOutcome::GameOver { .. } = resolve_collision(state, rng, out) {
        return;
    }

    update_progression(state, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::effects::TimerCommand;
    use crate::sim::progression::level_for_score;
    use crate::sim::rng::{ScriptedRng, SeededRng};
    use crate::sim::state::{Coin, GameMode, Obstacle, ObstacleKind};
    use crate::tuning::Difficulty;
    use proptest::prelude::*;

    fn playing(seed: u64) -> (GameState, SeededRng) {
        let mut rng = SeededRng::new(seed);
        let mut state = GameState::new(Difficulty::Normal, 0);
        state.start_run(&mut rng);
        (state, rng)
    }

    #[test]
    fn test_tick_outside_playing_is_noop() {
        let mut rng = SeededRng::new(1);
        let mut state = GameState::new(Difficulty::Normal, 0);
        let mut out = Vec::new();
        tick(&mut state, &mut rng, &mut out);
        assert_eq!(state.tick_count, 0);
        assert!(out.is_empty());

        state.mode = GameMode::GameOver;
        tick(&mut state, &mut rng, &mut out);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn test_tick_advances_clock_and_scroll() {
        let (mut state, mut rng) = playing(3);
        let mut out = Vec::new();
        for _ in 0..6 {
            tick(&mut state, &mut rng, &mut out);
        }
        assert_eq!(state.tick_count, 6);
        assert_eq!(state.road_scroll, 18 % DASH_TOTAL);
    }

    #[test]
    fn test_collision_after_movement() {
        let (mut state, _) = playing(5);
        // One step (3 units) puts the sedan squarely on the player
        state.obstacles.spawn(Obstacle {
            lane: 1,
            y: PLAYER_Y - 10,
            kind: ObstacleKind::Sedan,
        });
        let mut out = Vec::new();
        tick(&mut state, &mut ScriptedRng::default(), &mut out);
        assert_eq!(state.lives, INITIAL_LIVES - 1);
        assert_eq!(state.timers.invincible, crate::tuning::INVINCIBLE_TICKS);
    }

    #[test]
    fn test_game_over_short_circuits_progression() {
        let (mut state, _) = playing(9);
        state.lives = 1;
        state.score = 390;
        // Coin lands this tick (+25 -> 415), then the crash ends the run
        state.coins.spawn(Coin {
            lane: 1,
            y: PLAYER_Y - 3,
        });
        state.obstacles.spawn(Obstacle {
            lane: 1,
            y: PLAYER_Y - 3,
            kind: ObstacleKind::Sedan,
        });
        let mut out = Vec::new();
        tick(&mut state, &mut ScriptedRng::default(), &mut out);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.score, 415);
        assert_eq!(state.level, 0);
        assert!(out.contains(&Effect::Timer(TimerCommand::Stop)));
        assert!(!out.iter().any(|e| matches!(e, Effect::Timer(TimerCommand::Start { .. }))));

        // Ticks already queued behind the game over change nothing
        let frozen = state.tick_count;
        let mut late = Vec::new();
        tick(&mut state, &mut ScriptedRng::default(), &mut late);
        assert_eq!(state.tick_count, frozen);
        assert!(late.is_empty());
    }

    #[test]
    fn test_shield_expires_on_schedule() {
        let (mut state, mut rng) = playing(11);
        state.timers.shield = 2;
        tick(&mut state, &mut rng, &mut Vec::new());
        assert_eq!(state.timers.shield, 1);
        tick(&mut state, &mut rng, &mut Vec::new());
        assert_eq!(state.timers.shield, 0);
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut rng_a) = playing(99999);
        let (mut b, mut rng_b) = playing(99999);
        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        for i in 0..400 {
            if i % 17 == 0 {
                a.player_lane = (a.player_lane + 1) % LANE_COUNT;
                b.player_lane = a.player_lane;
            }
            tick(&mut a, &mut rng_a, &mut out_a);
            tick(&mut b, &mut rng_b, &mut out_b);
        }
        assert_eq!(a.tick_count, b.tick_count);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(out_a, out_b);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            lanes in proptest::collection::vec(0u8..LANE_COUNT, 1..600),
        ) {
            let (mut state, mut rng) = playing(seed);
            let mut out = Vec::new();
            for lane in lanes {
                if !state.is_playing() {
                    break;
                }
                let before = (state.score, state.level, state.lives);
                // Timers tick down before the collision pass, so protection
                // holds for this tick only if more than one tick is left
                let protected = state.timers.shield > 1 || state.timers.invincible > 1;
                state.player_lane = lane;
                tick(&mut state, &mut rng, &mut out);

                prop_assert!(state.obstacles.live_count() <= MAX_OBS);
                prop_assert!(state.coins.live_count() <= MAX_COINS);
                prop_assert!(state.powerups.live_count() <= MAX_POWERUPS);
                prop_assert!(state.player_lane < LANE_COUNT);
                prop_assert!(state.lives <= MAX_LIVES);
                prop_assert!(state.score >= before.0);
                prop_assert!(state.level >= before.1);

                if protected {
                    prop_assert!(state.lives >= before.2);
                }
                if state.lives < before.2 {
                    prop_assert_eq!(state.combo, 0);
                }

                if state.is_playing() {
                    prop_assert_eq!(state.level, level_for_score(state.score));
                    prop_assert_eq!(
                        state.interval_ms,
                        state.difficulty.interval_for_level(state.level)
                    );
                }
            }
        }
    }
}
