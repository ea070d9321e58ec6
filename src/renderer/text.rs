//! Terminal renderer
//!
//! Draws a coarse character-cell view of the road: one row per `CELL_H`
//! world units, one cell per lane. Good enough to play in a terminal and to
//! eyeball runs while debugging.

use std::io::Write;

use super::{Frame, Renderer};
use crate::consts::*;
use crate::game::MenuItem;
use crate::sim::{GameMode, ObstacleKind, PowerUpKind, SceneryKind, Side};
use crate::ui;

/// World units per text row
const CELL_H: i32 = 8;
const ROWS: usize = (SCREEN_H / CELL_H) as usize;
const LANE_CELL_W: usize = 3;

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Build the full screen as text
    pub fn compose(frame: &Frame<'_>) -> String {
        match frame.mode() {
            GameMode::Menu => compose_menu(frame),
            GameMode::Playing => compose_road(frame),
            GameMode::GameOver => {
                let mut screen = compose_road(frame);
                for line in ui::game_over_lines(frame) {
                    screen.push_str(&format!("  {}\n", line));
                }
                screen
            }
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) {
        let screen = Self::compose(frame);
        // Clear and home the cursor, then paint
        if let Err(e) = write!(self.out, "\x1b[2J\x1b[H{}", screen).and_then(|_| self.out.flush())
        {
            log::warn!("terminal draw failed: {}", e);
        }
    }
}

fn compose_menu(frame: &Frame<'_>) -> String {
    let mut screen = String::from("  LANE RUSH\n\n");
    screen.push_str(&format!("  Best: {}\n\n", frame.high_score()));
    for item in MenuItem::ALL {
        screen.push_str(&format!("  {}\n", ui::menu_label(frame, item)));
    }
    screen.push_str("\n  OK:Select\n");
    screen
}

fn row_of(y: i32) -> Option<usize> {
    (0..SCREEN_H).contains(&y).then(|| (y / CELL_H) as usize)
}

fn compose_road(frame: &Frame<'_>) -> String {
    let blank = if frame.night_mode() { '.' } else { ' ' };
    let mut road = [[blank; LANE_COUNT as usize]; ROWS];
    let mut left = [' '; ROWS];
    let mut right = [' '; ROWS];

    for item in frame.scenery() {
        if let Some(row) = row_of(item.y) {
            let glyph = match item.kind {
                SceneryKind::Tree => '^',
                SceneryKind::Pole => '|',
            };
            match item.side {
                Side::Left => left[row] = glyph,
                Side::Right => right[row] = glyph,
            }
        }
    }

    for (_, coin) in frame.coins() {
        if let Some(row) = row_of(coin.y) {
            road[row][coin.lane as usize] = 'o';
        }
    }
    for (_, p) in frame.powerups() {
        if let Some(row) = row_of(p.y) {
            road[row][p.lane as usize] = match p.kind {
                PowerUpKind::Shield => 'S',
                PowerUpKind::Magnet => 'M',
                PowerUpKind::Fuel => '+',
            };
        }
    }
    for (_, obs) in frame.obstacles() {
        let glyph = match obs.kind {
            ObstacleKind::Moto => 'i',
            ObstacleKind::Sedan => 'H',
            ObstacleKind::Truck => '#',
        };
        let height = obs.kind.shape().height;
        for y in [obs.y, obs.y + height - 1] {
            if let Some(row) = row_of(y) {
                let lane = obs.lane as usize;
                // Trucks hang over both neighbouring lanes
                let span = if obs.kind == ObstacleKind::Truck {
                    lane.saturating_sub(1)..=(lane + 1).min(LANE_COUNT as usize - 1)
                } else {
                    lane..=lane
                };
                for cell in &mut road[row][span] {
                    *cell = glyph;
                }
            }
        }
    }
    if frame.mode() == GameMode::GameOver || frame.player_visible() {
        let glyph = if frame.timers().shield > 0 { '@' } else { 'A' };
        for y in [PLAYER_Y, PLAYER_Y + CAR_H - 1] {
            if let Some(row) = row_of(y) {
                road[row][frame.player_lane() as usize] = glyph;
            }
        }
    }
    for p in frame.particles() {
        if let (Some(row), true) = (row_of(p.pos.y), (ROAD_LEFT..ROAD_RIGHT).contains(&p.pos.x)) {
            let lane = ((p.pos.x - ROAD_LEFT) / LANE_WIDTH).min(LANE_COUNT as i32 - 1) as usize;
            if road[row][lane] == blank {
                road[row][lane] = '*';
            }
        }
    }

    let mut screen = format!(" {}", ui::hud_line(frame));
    if let Some(badge) = ui::combo_badge(frame) {
        screen.push_str(&format!(" {}", badge));
    }
    for badge in ui::status_badges(frame) {
        screen.push_str(&format!(" [{}]", badge));
    }
    screen.push_str(&format!(" {}\n", "♥".repeat(frame.lives() as usize)));

    // Dashes scroll with the road phase
    let dash_offset = (frame.road_scroll() / CELL_H) as usize;
    for row in 0..ROWS {
        let divider = if (row + dash_offset) % 2 == 0 { ':' } else { ' ' };
        screen.push(left[row]);
        screen.push('|');
        for (lane, cell) in road[row].iter().enumerate() {
            if lane > 0 {
                screen.push(divider);
            }
            let pad = " ".repeat(LANE_CELL_W / 2);
            screen.push_str(&format!("{}{}{}", pad, cell, pad));
        }
        screen.push('|');
        screen.push(right[row]);
        screen.push('\n');
    }
    screen
}
