use crate::{Arena, Ball, Events, Paddle, Params, Score, SessionFlags, Side};
use hecs::World;
use tracing::{debug, info};

/// Resolve wall bounces, paddle hits and misses for this frame
///
/// Walls first, then the player (bottom) band, then the computer (top) band.
/// Both bands are checked every frame; within a band a hit and a miss are
/// mutually exclusive.
pub fn check_collisions(
    world: &mut World,
    arena: &Arena,
    flags: &mut SessionFlags,
    score: &mut Score,
    opponent_speed: &mut f32,
    events: &mut Events,
) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };
    let Some(mut ball) = ball_data else {
        return; // No ball in world
    };

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    let find_paddle = |side: Side| paddles.iter().find(|p| p.side == side).copied();

    bounce_off_walls(&mut ball, arena, events);

    if let Some(paddle) = find_paddle(Side::Player) {
        resolve_player_band(&mut ball, &paddle, arena, flags, score, opponent_speed, events);
    }
    if let Some(paddle) = find_paddle(Side::Computer) {
        resolve_computer_band(&mut ball, &paddle, arena, flags, score, events);
    }

    // Update ball
    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

/// Side walls reflect horizontal speed; position is not corrected
fn bounce_off_walls(ball: &mut Ball, arena: &Arena, events: &mut Events) {
    if (ball.pos.x < 0.0 && ball.vel.x < 0.0) || (ball.pos.x > arena.width && ball.vel.x > 0.0) {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_wall = true;
    }
}

fn resolve_player_band(
    ball: &mut Ball,
    paddle: &Paddle,
    arena: &Arena,
    flags: &mut SessionFlags,
    score: &mut Score,
    opponent_speed: &mut f32,
    events: &mut Events,
) {
    if ball.pos.y <= arena.player_paddle_y() {
        return;
    }

    if paddle.spans(ball.pos.x, arena.paddle_width) {
        ball.paddle_contact = true;

        if flags.player_moved {
            ball.vel.y -= Params::SPEED_Y_STEP;
            if ball.vel.y < -Params::MAX_SPEED_Y {
                ball.vel.y = -Params::MAX_SPEED_Y;
                if !flags.opponent_escalated {
                    flags.opponent_escalated = true;
                    *opponent_speed = Params::ESCALATED_OPPONENT_SPEED;
                    events.opponent_escalated = true;
                    info!(opponent_speed = *opponent_speed, "Opponent speed escalated");
                }
            }
        }
        ball.vel.y = -ball.vel.y;

        // Off-centre hits steer the ball sideways
        let trajectory_x = ball.pos.x - paddle.center_x(arena.paddle_width);
        ball.vel.x = trajectory_x * Params::TRAJECTORY_FACTOR;

        events.player_hit = true;
        debug!(x = ball.pos.x, speed_x = ball.vel.x, speed_y = ball.vel.y, "Player paddle hit");
    } else if ball.pos.y > arena.height {
        ball.serve(arena.center(), Params::SERVE_SPEED_Y);
        score.increment(Side::Computer);
        events.computer_scored = true;
        debug!(computer = score.computer, player = score.player, "Player missed");
    }
}

fn resolve_computer_band(
    ball: &mut Ball,
    paddle: &Paddle,
    arena: &Arena,
    flags: &SessionFlags,
    score: &mut Score,
    events: &mut Events,
) {
    if ball.pos.y >= arena.opponent_paddle_bottom() {
        return;
    }

    if paddle.spans(ball.pos.x, arena.paddle_width) {
        if flags.player_moved {
            ball.vel.y = (ball.vel.y + Params::SPEED_Y_STEP).min(Params::MAX_SPEED_Y);
        }
        ball.vel.y = -ball.vel.y;

        events.computer_hit = true;
        debug!(x = ball.pos.x, speed_y = ball.vel.y, "Computer paddle hit");
    } else if ball.pos.y < 0.0 {
        ball.serve(arena.center(), Params::SERVE_SPEED_Y);
        score.increment(Side::Player);
        events.player_scored = true;
        debug!(computer = score.computer, player = score.player, "Computer missed");
    }
}
