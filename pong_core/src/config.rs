use serde::Deserialize;
use tracing::debug;

use crate::params::Params;

/// Device class the arena is sized for, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Desktop,
    Mobile,
}

impl Preset {
    /// Pick the preset for a viewport width (CSS pixels)
    pub fn detect(viewport_width: f32) -> Self {
        if viewport_width <= Params::MOBILE_BREAKPOINT {
            Preset::Mobile
        } else {
            Preset::Desktop
        }
    }
}

/// Size of the host window the arena is carved from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Session configuration: geometry and tuning fixed for one game
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub center_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub opponent_speed: f32,
    pub win_score: u8,
    pub player_name: String,
    pub computer_name: String,
}

impl Arena {
    /// Build an arena for a preset, sized as a fraction of the viewport
    pub fn from_preset(preset: Preset, viewport: Viewport) -> Self {
        let (width_fraction, height_fraction, center_radius, ball_speed, opponent_speed) =
            match preset {
                Preset::Desktop => (
                    Params::DESKTOP_WIDTH_FRACTION,
                    Params::DESKTOP_HEIGHT_FRACTION,
                    Params::DESKTOP_CENTER_RADIUS,
                    Params::DESKTOP_BALL_SPEED,
                    Params::DESKTOP_OPPONENT_SPEED,
                ),
                Preset::Mobile => (
                    Params::MOBILE_WIDTH_FRACTION,
                    Params::MOBILE_HEIGHT_FRACTION,
                    Params::MOBILE_CENTER_RADIUS,
                    Params::MOBILE_BALL_SPEED,
                    Params::MOBILE_OPPONENT_SPEED,
                ),
            };

        Self {
            width: viewport.width * width_fraction,
            height: viewport.height * height_fraction,
            center_radius,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed,
            opponent_speed,
            win_score: Params::WIN_SCORE,
            player_name: Params::PLAYER_NAME.to_string(),
            computer_name: Params::COMPUTER_NAME.to_string(),
        }
    }

    /// Detect the preset from the viewport and build the arena for it
    pub fn detect(viewport: Viewport) -> Self {
        let preset = Preset::detect(viewport.width);
        debug!(?preset, width = viewport.width, height = viewport.height, "Resolved arena preset");
        Self::from_preset(preset, viewport)
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half the paddle width (distance from left edge to paddle centre)
    pub fn paddle_half_width(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Largest left-edge x that keeps the player paddle inside the arena
    pub fn max_paddle_x(&self) -> f32 {
        (self.width - self.paddle_width).max(0.0)
    }

    /// Clamp paddle left edge to arena bounds
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_paddle_x())
    }

    /// Left edge that centres a paddle horizontally
    pub fn centered_paddle_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_half_width()
    }

    /// Y of the top of the player (bottom) paddle
    pub fn player_paddle_y(&self) -> f32 {
        self.height - (self.paddle_offset + self.paddle_height)
    }

    /// Y of the bottom of the opponent (top) paddle
    pub fn opponent_paddle_bottom(&self) -> f32 {
        self.paddle_offset + self.paddle_height
    }

    /// Apply overrides on top of this arena
    pub fn with_overrides(mut self, overrides: &ArenaOverrides) -> Self {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(radius) = overrides.center_radius {
            self.center_radius = radius;
        }
        if let Some(width) = overrides.paddle_width {
            self.paddle_width = width;
        }
        if let Some(height) = overrides.paddle_height {
            self.paddle_height = height;
        }
        if let Some(offset) = overrides.paddle_offset {
            self.paddle_offset = offset;
        }
        if let Some(radius) = overrides.ball_radius {
            self.ball_radius = radius;
        }
        if let Some(speed) = overrides.ball_speed {
            self.ball_speed = speed;
        }
        if let Some(speed) = overrides.opponent_speed {
            self.opponent_speed = speed;
        }
        if let Some(score) = overrides.win_score {
            self.win_score = score;
        }
        if let Some(name) = &overrides.player_name {
            self.player_name = name.clone();
        }
        if let Some(name) = &overrides.computer_name {
            self.computer_name = name.clone();
        }
        self
    }
}

impl Default for Arena {
    fn default() -> Self {
        // 1280x800 desktop window
        Self::from_preset(Preset::Desktop, Viewport::new(1280.0, 800.0))
    }
}

/// Optional per-session overrides, typically read from TOML
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaOverrides {
    pub preset: Option<Preset>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub center_radius: Option<f32>,
    pub paddle_width: Option<f32>,
    pub paddle_height: Option<f32>,
    pub paddle_offset: Option<f32>,
    pub ball_radius: Option<f32>,
    pub ball_speed: Option<f32>,
    pub opponent_speed: Option<f32>,
    pub win_score: Option<u8>,
    pub player_name: Option<String>,
    pub computer_name: Option<String>,
}

impl ArenaOverrides {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the arena for a viewport: forced preset or detection, then overrides
    pub fn resolve(&self, viewport: Viewport) -> Arena {
        let base = match self.preset {
            Some(preset) => Arena::from_preset(preset, viewport),
            None => Arena::detect(viewport),
        };
        base.with_overrides(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_detect() {
        assert_eq!(Preset::detect(375.0), Preset::Mobile);
        assert_eq!(Preset::detect(768.0), Preset::Mobile);
        assert_eq!(Preset::detect(769.0), Preset::Desktop);
        assert_eq!(Preset::detect(1920.0), Preset::Desktop);
    }

    #[test]
    fn test_desktop_arena_dimensions() {
        let arena = Arena::from_preset(Preset::Desktop, Viewport::new(1000.0, 800.0));
        assert!((arena.width - 600.0).abs() < 1e-3);
        assert!((arena.height - 720.0).abs() < 1e-3);
        assert_eq!(arena.center_radius, 75.0);
        assert_eq!(arena.ball_speed, -1.0);
        assert_eq!(arena.opponent_speed, 3.0);
        assert_eq!(arena.win_score, 3);
    }

    #[test]
    fn test_mobile_arena_dimensions() {
        let arena = Arena::from_preset(Preset::Mobile, Viewport::new(400.0, 800.0));
        assert!((arena.width - 392.0).abs() < 1e-3);
        assert!((arena.height - 784.0).abs() < 1e-3);
        assert_eq!(arena.center_radius, 50.0);
        assert_eq!(arena.ball_speed, -2.0);
        assert_eq!(arena.opponent_speed, 4.0);
    }

    #[test]
    fn test_clamp_paddle_x() {
        let arena = Arena::default();
        assert_eq!(arena.clamp_paddle_x(-20.0), 0.0);
        assert_eq!(arena.clamp_paddle_x(1.0e6), arena.width - arena.paddle_width);
        assert_eq!(arena.clamp_paddle_x(100.0), 100.0);
    }

    #[test]
    fn test_paddle_bands() {
        let arena = Arena::default();
        assert_eq!(arena.opponent_paddle_bottom(), 16.0);
        assert_eq!(arena.player_paddle_y(), arena.height - 16.0);
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides = ArenaOverrides::from_toml(
            r#"
            preset = "mobile"
            win_score = 5
            player_name = "Ada"
            "#,
        )
        .unwrap();
        assert_eq!(overrides.preset, Some(Preset::Mobile));

        let arena = overrides.resolve(Viewport::new(1920.0, 1080.0));
        assert_eq!(arena.win_score, 5);
        assert_eq!(arena.player_name, "Ada");
        assert_eq!(arena.computer_name, Params::COMPUTER_NAME);
        assert_eq!(arena.opponent_speed, Params::MOBILE_OPPONENT_SPEED);
    }

    #[test]
    fn test_empty_overrides_detect_preset() {
        let overrides = ArenaOverrides::from_toml("").unwrap();
        let arena = overrides.resolve(Viewport::new(1920.0, 1080.0));
        assert_eq!(arena, Arena::from_preset(Preset::Desktop, Viewport::new(1920.0, 1080.0)));
    }

    #[test]
    fn test_malformed_overrides_rejected() {
        assert!(ArenaOverrides::from_toml("win_score = \"lots\"").is_err());
    }
}
