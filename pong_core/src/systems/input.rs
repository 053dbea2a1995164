use hecs::World;

use crate::components::*;
use crate::config::Arena;
use crate::resources::*;

/// Move the player paddle so its centre follows the pointer
///
/// `raw_x` is canvas-relative. The paddle's left edge is clamped to the
/// arena; non-finite input is dropped.
pub fn apply_pointer(world: &mut World, arena: &Arena, flags: &mut SessionFlags, raw_x: f32) {
    if !raw_x.is_finite() {
        return;
    }

    flags.player_moved = true;
    flags.pointer_tracking = true;

    let target = arena.clamp_paddle_x(raw_x - arena.paddle_half_width());
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.x = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn setup() -> (World, Arena, SessionFlags) {
        let arena = Arena::default();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, arena.centered_paddle_x());
        create_paddle(&mut world, Side::Computer, arena.centered_paddle_x());
        (world, arena, SessionFlags::default())
    }

    fn paddle_x(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.x)
            .unwrap()
    }

    #[test]
    fn test_pointer_centres_paddle() {
        let (mut world, arena, mut flags) = setup();

        apply_pointer(&mut world, &arena, &mut flags, 200.0);

        assert_eq!(paddle_x(&world, Side::Player), 200.0 - arena.paddle_half_width());
        assert!(flags.player_moved);
        assert!(flags.pointer_tracking);
    }

    #[test]
    fn test_pointer_clamped_to_arena() {
        let (mut world, arena, mut flags) = setup();

        apply_pointer(&mut world, &arena, &mut flags, 5.0);
        assert_eq!(paddle_x(&world, Side::Player), 0.0);

        apply_pointer(&mut world, &arena, &mut flags, arena.width + 40.0);
        assert_eq!(
            paddle_x(&world, Side::Player),
            arena.width - arena.paddle_width
        );
    }

    #[test]
    fn test_pointer_leaves_opponent_alone() {
        let (mut world, arena, mut flags) = setup();
        let before = paddle_x(&world, Side::Computer);

        apply_pointer(&mut world, &arena, &mut flags, 10.0);

        assert_eq!(paddle_x(&world, Side::Computer), before);
    }

    #[test]
    fn test_non_finite_pointer_ignored() {
        let (mut world, arena, mut flags) = setup();
        let before = paddle_x(&world, Side::Player);

        apply_pointer(&mut world, &arena, &mut flags, f32::NAN);
        apply_pointer(&mut world, &arena, &mut flags, f32::INFINITY);

        assert_eq!(paddle_x(&world, Side::Player), before);
        assert!(!flags.player_moved);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn player_paddle_always_inside_arena(
                pointer_xs in proptest::collection::vec(-5000.0f32..5000.0, 1..40)
            ) {
                let (mut world, arena, mut flags) = setup();

                for x in pointer_xs {
                    apply_pointer(&mut world, &arena, &mut flags, x);
                    let paddle = paddle_x(&world, Side::Player);
                    prop_assert!(
                        (0.0..=arena.width - arena.paddle_width).contains(&paddle),
                        "Paddle x={} escaped the arena",
                        paddle
                    );
                }
            }
        }
    }
}
