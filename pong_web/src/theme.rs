//! Presentation constants and layout for the canvas renderer

use pong_core::{Arena, Side};

pub const STROKE_COLOR: &str = "white";
pub const FONT_FAMILY: &str = "Arial";
pub const SCORE_FONT_SIZE: u32 = 32;
pub const LABEL_FONT_SIZE: u32 = 40;
pub const DIM_TEXT_COLOR: &str = "rgba(255, 255, 255, 0.5)";
pub const BRIGHT_TEXT_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const GRADIENT_START: &str = "#0499f2";
pub const GRADIENT_END: &str = "#63a4ff";
pub const FLAT_BACKGROUND: &str = "#0499f2";
pub const LINE_GAP: f64 = 6.0;
pub const CENTER_LINE_WIDTH: f64 = 2.0;
pub const SCORE_X: f64 = 20.0;
pub const COMPUTER_SCORE_OFFSET: f64 = 25.0; // above centre line
pub const PLAYER_SCORE_OFFSET: f64 = 31.0; // below centre line

/// Presentation variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Gradient background with highlighted name labels
    #[default]
    Gradient,
    /// Flat background, scores only
    Flat,
}

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gradient" => Some(Theme::Gradient),
            "flat" => Some(Theme::Flat),
            _ => None,
        }
    }

    pub fn shows_labels(&self) -> bool {
        matches!(self, Theme::Gradient)
    }
}

/// Label colour for `side`: the half holding the ball is highlighted
pub fn label_color(side: Side, active_half: Side) -> &'static str {
    if side == active_half {
        BRIGHT_TEXT_COLOR
    } else {
        DIM_TEXT_COLOR
    }
}

/// Baseline y for a side's score text
pub fn score_y(side: Side, arena: &Arena) -> f64 {
    let mid = arena.height as f64 / 2.0;
    match side {
        Side::Computer => mid - COMPUTER_SCORE_OFFSET,
        Side::Player => mid + PLAYER_SCORE_OFFSET,
    }
}

/// Vertical centre of a side's name label
pub fn label_y(side: Side, arena: &Arena) -> f64 {
    let height = arena.height as f64;
    match side {
        Side::Computer => height * 3.0 / 16.0,
        Side::Player => height * 13.0 / 16.0,
    }
}

pub fn font(size: u32) -> String {
    format!("{}px {}", size, FONT_FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("flat"), Some(Theme::Flat));
        assert_eq!(Theme::from_name("gradient"), Some(Theme::Gradient));
        assert_eq!(Theme::from_name("neon"), None);
        assert!(Theme::Gradient.shows_labels());
        assert!(!Theme::Flat.shows_labels());
    }

    #[test]
    fn test_label_highlight_swaps_with_ball_half() {
        assert_eq!(label_color(Side::Computer, Side::Computer), BRIGHT_TEXT_COLOR);
        assert_eq!(label_color(Side::Player, Side::Computer), DIM_TEXT_COLOR);
        assert_eq!(label_color(Side::Player, Side::Player), BRIGHT_TEXT_COLOR);
    }

    #[test]
    fn test_score_layout_around_centre() {
        let arena = Arena {
            height: 800.0,
            ..Arena::default()
        };
        assert_eq!(score_y(Side::Computer, &arena), 375.0);
        assert_eq!(score_y(Side::Player, &arena), 431.0);
        assert_eq!(label_y(Side::Computer, &arena), 150.0);
        assert_eq!(label_y(Side::Player, &arena), 650.0);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(32), "32px Arial");
    }
}
