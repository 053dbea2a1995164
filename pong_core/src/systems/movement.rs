use crate::{Ball, SessionFlags};
use hecs::World;

/// Advance the ball by one frame
///
/// Vertical motion always applies. Horizontal motion only starts once the
/// player has moved and the ball has touched the player paddle.
pub fn move_ball(world: &mut World, flags: &SessionFlags) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.y += -ball.vel.y;
        if flags.player_moved && ball.paddle_contact {
            ball.pos.x += ball.vel.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_negative_speed_moves_ball_down() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(2.0, -3.0));

        move_ball(&mut world, &SessionFlags::default());

        assert_eq!(ball(&world).pos, Vec2::new(100.0, 103.0));
    }

    #[test]
    fn test_no_horizontal_drift_before_contact() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(2.0, 3.0));
        let flags = SessionFlags {
            player_moved: true,
            ..Default::default()
        };

        move_ball(&mut world, &flags);

        assert_eq!(ball(&world).pos.x, 100.0);
        assert_eq!(ball(&world).pos.y, 97.0);
    }

    #[test]
    fn test_horizontal_motion_after_contact() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(2.0, 3.0));
        world.get::<&mut Ball>(entity).unwrap().paddle_contact = true;

        // Contact alone is not enough
        move_ball(&mut world, &SessionFlags::default());
        assert_eq!(ball(&world).pos.x, 100.0);

        let flags = SessionFlags {
            player_moved: true,
            ..Default::default()
        };
        move_ball(&mut world, &flags);
        assert_eq!(ball(&world).pos.x, 102.0);
    }
}
