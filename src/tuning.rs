//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so the rules can be audited
//! in one place: tick intervals, spawn cadences, scoring and timer lengths.

use serde::{Deserialize, Serialize};

/// Difficulty chosen on the menu before a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Per-difficulty tuning row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTuning {
    /// Tick interval at level 0 (ms)
    pub base_interval_ms: u32,
    /// Tick interval floor (ms)
    pub min_interval_ms: u32,
    /// Ticks between obstacle spawns
    pub obstacle_cadence: u64,
}

const EASY: DifficultyTuning = DifficultyTuning {
    base_interval_ms: 140,
    min_interval_ms: 70,
    obstacle_cadence: 15,
};

const NORMAL: DifficultyTuning = DifficultyTuning {
    base_interval_ms: 120,
    min_interval_ms: 50,
    obstacle_cadence: 12,
};

const HARD: DifficultyTuning = DifficultyTuning {
    base_interval_ms: 90,
    min_interval_ms: 35,
    obstacle_cadence: 9,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn tuning(self) -> &'static DifficultyTuning {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }

    /// Menu cycling order: Easy -> Normal -> Hard -> Easy
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Tick interval for a level: `base - level * 8`, floored at the minimum
    pub fn interval_for_level(self, level: u8) -> u32 {
        let t = self.tuning();
        t.base_interval_ms
            .saturating_sub(level as u32 * LEVEL_INTERVAL_STEP_MS)
            .max(t.min_interval_ms)
    }
}

/// Interval reduction per level (ms)
pub const LEVEL_INTERVAL_STEP_MS: u32 = 8;
/// Score needed per level
pub const SCORE_PER_LEVEL: u32 = 200;
pub const MAX_LEVEL: u8 = 9;

/// Spawn cadences independent of difficulty
pub const COIN_CADENCE: u64 = 18;
pub const POWERUP_CADENCE: u64 = 60;

/// Boss trucks appear on levels that are a multiple of this
pub const BOSS_LEVEL_MULTIPLE: u8 = 5;
/// 1-in-N chance an obstacle on a boss level is a truck
pub const BOSS_TRUCK_ODDS: u32 = 4;
/// 1-in-N chance a regular obstacle is a moto
pub const MOTO_ODDS: u32 = 3;

/// Scoring
pub const OBSTACLE_PASSED_BONUS: u32 = 10;
pub const COIN_POINTS: u32 = 25;

/// Status timer lengths (ticks)
pub const INVINCIBLE_TICKS: u8 = 20;
pub const SHIELD_TICKS: u8 = 50;
pub const MAGNET_TICKS: u8 = 60;
pub const COMBO_DISPLAY_TICKS: u8 = 15;

/// Magnet pull reach and step
pub const MAGNET_RANGE: i32 = 30;
pub const MAGNET_PULL_STEP: i32 = 4;

/// Vertical speeds (units per tick)
pub const BASE_FALL_SPEED: i32 = 3;
pub const SCENERY_SPEED: i32 = 2;

/// Fall speed shared by obstacles, coins and power-ups at a level
pub fn fall_speed(level: u8) -> i32 {
    BASE_FALL_SPEED + (level / 2) as i32
}
