use crate::{Arena, GameOver, Score, SessionFlags, Side};
use tracing::info;

/// Check whether either side has reached the winning score
///
/// Runs after the frame's physics. Sets `is_game_over` and returns the
/// notification for the presentation layer the first time a winner exists.
pub fn check_game_over(score: &Score, arena: &Arena, flags: &mut SessionFlags) -> Option<GameOver> {
    if flags.is_game_over {
        return None;
    }

    let winner = score.has_winner(arena.win_score)?;
    flags.is_game_over = true;

    let winner_name = match winner {
        Side::Player => arena.player_name.clone(),
        Side::Computer => arena.computer_name.clone(),
    };
    info!(
        winner = %winner_name,
        player = score.player,
        computer = score.computer,
        "Game over"
    );

    Some(GameOver {
        winner,
        winner_name,
    })
}
