//! Lane Rush - a three-lane vertical racing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (entities, collisions, scoring, progression)
//! - `game`: Mode state machine (Menu/Playing/GameOver) and input handling
//! - `renderer`: Read-only frame snapshot and a terminal renderer
//! - `platform`: Event queue, tick timer and input producers
//! - `tuning`: Data-driven difficulty balance

pub mod app;
pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::HighScoreStore;
pub use settings::Settings;
pub use tuning::Difficulty;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (portrait)
    pub const SCREEN_W: i32 = 64;
    pub const SCREEN_H: i32 = 128;

    /// Road extents and lane layout
    pub const ROAD_LEFT: i32 = 10;
    pub const ROAD_RIGHT: i32 = 53;
    pub const ROAD_WIDTH: i32 = ROAD_RIGHT - ROAD_LEFT;
    pub const LANE_COUNT: u8 = 3;
    pub const LANE_WIDTH: i32 = ROAD_WIDTH / LANE_COUNT as i32;

    /// Player car footprint; the car never moves vertically
    pub const CAR_W: i32 = 10;
    pub const CAR_H: i32 = 13;
    pub const PLAYER_Y: i32 = 105;
    pub const START_LANE: u8 = 1;

    /// Pool capacities
    pub const MAX_OBS: usize = 5;
    pub const MAX_COINS: usize = 3;
    pub const MAX_POWERUPS: usize = 2;
    pub const MAX_SCENERY: usize = 6;
    pub const MAX_PARTICLES: usize = 12;

    pub const INITIAL_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Lane divider dashes (drives the scroll phase)
    pub const DASH_LEN: i32 = 8;
    pub const DASH_GAP: i32 = 8;
    pub const DASH_TOTAL: i32 = DASH_LEN + DASH_GAP;
    pub const ROAD_SCROLL_STEP: i32 = 3;
}

/// Horizontal centre of a lane
#[inline]
pub fn lane_center_x(lane: u8) -> i32 {
    use consts::*;
    ROAD_LEFT + LANE_WIDTH / 2 + lane as i32 * LANE_WIDTH
}

/// Left edge of a car-sized sprite centred in a lane
#[inline]
pub fn car_left_x(lane: u8) -> i32 {
    lane_center_x(lane) - consts::CAR_W / 2
}
