//! Rendering interface
//!
//! Renderers only ever see a [`Frame`]: a borrowed, read-only view of the
//! simulation plus the presentation options. They cannot mutate game state.

pub mod text;

pub use text::TextRenderer;

use crate::game::{MenuItem, Options};
use crate::sim::{
    Coin, GameMode, GameState, Obstacle, Particle, PowerUp, Scenery, StatusTimers,
};
use crate::tuning::Difficulty;
use crate::car_left_x;

/// Anything that can present a frame
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Read-only snapshot handed to renderers once per processed event
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    state: &'a GameState,
    options: Options,
    menu_item: MenuItem,
}

impl<'a> Frame<'a> {
    pub fn new(state: &'a GameState, options: Options, menu_item: MenuItem) -> Self {
        Self {
            state,
            options,
            menu_item,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (usize, &'a Obstacle)> + 'a {
        self.state.obstacles.iter()
    }

    pub fn coins(&self) -> impl Iterator<Item = (usize, &'a Coin)> + 'a {
        self.state.coins.iter()
    }

    pub fn powerups(&self) -> impl Iterator<Item = (usize, &'a PowerUp)> + 'a {
        self.state.powerups.iter()
    }

    pub fn scenery(&self) -> &'a [Scenery] {
        &self.state.scenery
    }

    pub fn particles(&self) -> impl Iterator<Item = &'a Particle> + 'a {
        self.state.live_particles()
    }

    pub fn player_lane(&self) -> u8 {
        self.state.player_lane
    }

    pub fn player_x(&self) -> i32 {
        car_left_x(self.state.player_lane)
    }

    /// Player blinks while invincible after a hit
    pub fn player_visible(&self) -> bool {
        self.state.timers.invincible == 0 || self.state.tick_count % 4 < 2
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    /// Zero-based level
    pub fn level(&self) -> u8 {
        self.state.level
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick_count
    }

    pub fn timers(&self) -> StatusTimers {
        self.state.timers
    }

    pub fn combo(&self) -> u8 {
        self.state.combo
    }

    pub fn road_scroll(&self) -> i32 {
        self.state.road_scroll
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn night_mode(&self) -> bool {
        self.options.night_mode
    }

    pub fn sound_on(&self) -> bool {
        self.options.sound_on
    }

    pub fn menu_item(&self) -> MenuItem {
        self.menu_item
    }
}
