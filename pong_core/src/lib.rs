pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
///
/// Returns the game-over notification on the frame a side reaches the
/// winning score. Once the game is over further calls do nothing.
pub fn step(state: &mut SimulationState) -> Option<GameOver> {
    if state.flags.is_game_over {
        return None;
    }

    // Clear events at start of frame
    state.events.clear();

    // 1. Move ball
    move_ball(&mut state.world, &state.flags);

    // 2-4. Walls, then player band, then computer band (hits and misses)
    check_collisions(
        &mut state.world,
        &state.arena,
        &mut state.flags,
        &mut state.score,
        &mut state.opponent_speed,
        &mut state.events,
    );

    // 5. Opponent controller
    move_opponent(
        &mut state.world,
        &state.arena,
        &state.flags,
        state.opponent_speed,
    );

    // 6. Terminal check, after all physics
    check_game_over(&state.score, &state.arena, &mut state.flags)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
