//! Game state and core simulation types
//!
//! `GameState` owns every pool and scalar of a run. Entities are plain values
//! addressed by pool slot; nothing holds a reference across ticks.

use glam::IVec2;

use super::pool::Pool;
use super::rng::SimRng;
use crate::consts::*;
use crate::tuning::Difficulty;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Hitbox and speed rules for one obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleShape {
    /// Horizontal offset from the lane's car-left edge
    pub x_offset: i32,
    pub width: i32,
    pub height: i32,
    /// Added to the level fall speed
    pub speed_delta: i32,
    /// Distance past the bottom edge before the obstacle retires
    pub exit_margin: i32,
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Narrow and fast
    Moto,
    Sedan,
    /// Boss truck, spans two lanes from the centre lane
    Truck,
}

impl ObstacleKind {
    pub fn shape(self) -> &'static ObstacleShape {
        match self {
            ObstacleKind::Moto => &ObstacleShape {
                x_offset: 2,
                width: 6,
                height: 10,
                speed_delta: 1,
                exit_margin: 12,
            },
            ObstacleKind::Sedan => &ObstacleShape {
                x_offset: 0,
                width: CAR_W,
                height: 12,
                speed_delta: 0,
                exit_margin: 12,
            },
            ObstacleKind::Truck => &ObstacleShape {
                x_offset: -5,
                width: 20,
                height: 16,
                speed_delta: -1,
                exit_margin: 16,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub lane: u8,
    pub y: i32,
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub lane: u8,
    pub y: i32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Shield,
    Magnet,
    /// Extra life, capped at `MAX_LIVES`
    Fuel,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Shield, PowerUpKind::Magnet, PowerUpKind::Fuel];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub lane: u8,
    pub y: i32,
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneryKind {
    #[default]
    Tree,
    Pole,
}

/// Roadside decoration. Always present; recycled instead of destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scenery {
    pub y: i32,
    pub side: Side,
    pub kind: SceneryKind,
}

impl Scenery {
    /// Pick a fresh side and kind (vertical position is set by the caller)
    pub fn reroll(&mut self, rng: &mut impl SimRng) {
        self.side = if rng.below(2) == 0 { Side::Left } else { Side::Right };
        self.kind = if rng.below(2) == 0 {
            SceneryKind::Tree
        } else {
            SceneryKind::Pole
        };
    }
}

/// Crash debris. A slot with `life == 0` is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Particle {
    pub pos: IVec2,
    pub vel: IVec2,
    pub life: u8,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Countdowns decremented once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTimers {
    /// Grace period after losing a life
    pub invincible: u8,
    pub shield: u8,
    pub magnet: u8,
    /// How long the combo badge stays on screen
    pub combo_display: u8,
}

impl StatusTimers {
    pub fn tick_down(&mut self) {
        self.invincible = self.invincible.saturating_sub(1);
        self.shield = self.shield.saturating_sub(1);
        self.magnet = self.magnet.saturating_sub(1);
        self.combo_display = self.combo_display.saturating_sub(1);
    }

    /// Collisions are ignored while either protection is up
    pub fn is_protected(&self) -> bool {
        self.invincible > 0 || self.shield > 0
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player_lane: u8,
    pub score: u32,
    /// Best score seen so far (loaded from storage at startup)
    pub high_score: u32,
    pub level: u8,
    pub lives: u8,
    /// Current tick interval in milliseconds
    pub interval_ms: u32,
    pub tick_count: u64,
    /// Lane-divider scroll phase in `[0, DASH_TOTAL)`
    pub road_scroll: i32,
    pub timers: StatusTimers,
    pub combo: u8,
    pub obstacles: Pool<Obstacle, MAX_OBS>,
    pub coins: Pool<Coin, MAX_COINS>,
    pub powerups: Pool<PowerUp, MAX_POWERUPS>,
    pub scenery: [Scenery; MAX_SCENERY],
    pub particles: [Particle; MAX_PARTICLES],
}

impl GameState {
    /// Fresh session sitting on the menu
    pub fn new(difficulty: Difficulty, high_score: u32) -> Self {
        Self {
            mode: GameMode::Menu,
            difficulty,
            player_lane: START_LANE,
            score: 0,
            high_score,
            level: 0,
            lives: INITIAL_LIVES,
            interval_ms: difficulty.tuning().base_interval_ms,
            tick_count: 0,
            road_scroll: 0,
            timers: StatusTimers::default(),
            combo: 0,
            obstacles: Pool::new(),
            coins: Pool::new(),
            powerups: Pool::new(),
            scenery: [Scenery::default(); MAX_SCENERY],
            particles: [Particle::default(); MAX_PARTICLES],
        }
    }

    /// Reset everything a run owns and enter `Playing`
    pub fn start_run(&mut self, rng: &mut impl SimRng) {
        self.mode = GameMode::Playing;
        self.player_lane = START_LANE;
        self.score = 0;
        self.level = 0;
        self.lives = INITIAL_LIVES;
        self.interval_ms = self.difficulty.tuning().base_interval_ms;
        self.tick_count = 0;
        self.road_scroll = 0;
        self.timers = StatusTimers::default();
        self.combo = 0;

        self.obstacles.clear();
        self.coins.clear();
        self.powerups.clear();
        self.particles = [Particle::default(); MAX_PARTICLES];

        for item in &mut self.scenery {
            item.y = rng.below(SCREEN_H as u32) as i32;
            item.reroll(rng);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }
}
