use crate::{Arena, Ball, Paddle, SessionFlags, Side};
use hecs::World;

/// Step the computer paddle toward the ball
///
/// Reactive only: compares the paddle centre with the ball's x and moves a
/// fixed `speed` toward it. The paddle is not clamped to the arena. Idle
/// until the player has moved.
pub fn move_opponent(world: &mut World, arena: &Arena, flags: &SessionFlags, speed: f32) {
    if !flags.player_moved {
        return;
    }

    let Some(ball_x) = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)
    else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }
        if paddle.center_x(arena.paddle_width) < ball_x {
            paddle.x += speed;
        } else {
            paddle.x -= speed;
        }
    }
}
