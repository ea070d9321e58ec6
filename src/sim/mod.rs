//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per timer event)
//! - Injected RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering, audio or platform dependencies; side effects leave as `Effect`s

pub mod collect;
pub mod collision;
pub mod effects;
pub mod movement;
pub mod pool;
pub mod progression;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, Hitbox};
pub use effects::{Effect, SoundEffect, TimerCommand};
pub use pool::Pool;
pub use progression::level_for_score;
pub use rng::{ScriptedRng, SeededRng, SimRng};
pub use state::{
    Coin, GameMode, GameState, Obstacle, ObstacleKind, Particle, PowerUp, PowerUpKind, Scenery,
    SceneryKind, Side, StatusTimers,
};
pub use tick::tick;
