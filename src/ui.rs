//! HUD and menu text
//!
//! Pure string builders shared by renderers.

use crate::game::MenuItem;
use crate::renderer::Frame;

/// Top bar: score and one-based level
pub fn hud_line(frame: &Frame<'_>) -> String {
    format!("S:{} L:{}", frame.score(), frame.level() + 1)
}

/// `x{combo}` while the combo badge is on screen and worth showing
pub fn combo_badge(frame: &Frame<'_>) -> Option<String> {
    (frame.timers().combo_display > 0 && frame.combo() > 1).then(|| format!("x{}", frame.combo()))
}

/// Active power-up badges, shield first
pub fn status_badges(frame: &Frame<'_>) -> Vec<&'static str> {
    let timers = frame.timers();
    let mut badges = Vec::new();
    if timers.shield > 0 {
        badges.push("S");
    }
    if timers.magnet > 0 {
        badges.push("M");
    }
    badges
}

fn on_off(v: bool) -> &'static str {
    if v { "ON" } else { "OFF" }
}

pub fn menu_label(frame: &Frame<'_>, item: MenuItem) -> String {
    let text = match item {
        MenuItem::Start => "START".to_string(),
        MenuItem::Sound => format!("SOUND:{}", on_off(frame.sound_on())),
        MenuItem::Night => format!("NIGHT:{}", on_off(frame.night_mode())),
        MenuItem::Difficulty => frame.difficulty().as_str().to_string(),
    };
    if item == frame.menu_item() {
        format!("> {} <", text)
    } else {
        text
    }
}

/// Lines of the game-over card
pub fn game_over_lines(frame: &Frame<'_>) -> Vec<String> {
    let best = if frame.score() >= frame.high_score() && frame.score() > 0 {
        "NEW BEST!".to_string()
    } else {
        format!("Best: {}", frame.high_score())
    };
    vec![
        "GAME OVER".to_string(),
        format!("Score: {}", frame.score()),
        best,
        format!("Combo: x{}", frame.combo().max(1)),
        "OK: Menu".to_string(),
    ]
}
