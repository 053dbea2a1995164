use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point to `side`
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Session-wide flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlags {
    /// Set by the first pointer input and never cleared
    pub player_moved: bool,
    pub is_game_over: bool,
    /// True until the first session start
    pub is_new_game: bool,
    /// Pointer is driving the paddle; the host hides the cursor
    pub pointer_tracking: bool,
    /// Opponent speed has been raised to its elevated value
    pub opponent_escalated: bool,
}

impl Default for SessionFlags {
    fn default() -> Self {
        Self {
            player_moved: false,
            is_game_over: false,
            is_new_game: true,
            pointer_tracking: false,
            opponent_escalated: false,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_hit: bool,
    pub computer_hit: bool,
    pub ball_hit_wall: bool,
    pub player_scored: bool,
    pub computer_scored: bool,
    pub opponent_escalated: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Terminal notification handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    pub winner: Side,
    pub winner_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Computer);
        score.increment(Side::Computer);
        assert_eq!(score.player, 1);
        assert_eq!(score.computer, 2);
        assert_eq!(score.get(Side::Computer), 2);
    }

    #[test]
    fn test_score_has_winner_player() {
        let mut score = Score::new();
        for _ in 0..3 {
            score.increment(Side::Player);
        }
        assert_eq!(score.has_winner(3), Some(Side::Player));
    }

    #[test]
    fn test_score_has_winner_computer() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Computer);
        }
        assert_eq!(score.has_winner(5), Some(Side::Computer));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            player: 2,
            computer: 2,
        };
        assert_eq!(score.has_winner(3), None, "No winner below threshold");
    }

    #[test]
    fn test_flags_start_as_new_game() {
        let flags = SessionFlags::default();
        assert!(flags.is_new_game);
        assert!(!flags.player_moved);
        assert!(!flags.is_game_over);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_hit = true;
        events.computer_scored = true;
        events.opponent_escalated = true;

        events.clear();

        assert!(!events.player_hit);
        assert!(!events.computer_scored);
        assert!(!events.opponent_escalated);
    }
}
