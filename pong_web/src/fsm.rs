//! Session State Machine
//!
//! Tracks where the page is in the start / play / game-over cycle so that
//! stray clicks cannot start a second loop or restart a running game.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    GameOver,
    PlayAgain,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Session Finite State Machine
#[derive(Debug)]
pub struct SessionFsm {
    state: FsmState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Playing),
            (FsmState::Playing, GameAction::GameOver) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::PlayAgain) => Some(FsmState::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
