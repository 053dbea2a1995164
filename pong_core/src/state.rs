//! Authoritative simulation state for one session

use glam::Vec2;
use hecs::World;
use tracing::info;

use crate::components::{Ball, Paddle, Side};
use crate::config::Arena;
use crate::params::Params;
use crate::resources::{Events, Score, SessionFlags};
use crate::systems::apply_pointer;
use crate::{create_ball, create_paddle};

/// World plus the session resources the frame step works on
pub struct SimulationState {
    pub world: World,
    pub arena: Arena,
    pub score: Score,
    pub flags: SessionFlags,
    pub events: Events,
    pub opponent_speed: f32,
}

impl SimulationState {
    /// Fresh state before the first session start
    pub fn new(arena: Arena) -> Self {
        let mut world = World::new();
        spawn_entities(&mut world, &arena);

        Self {
            world,
            opponent_speed: arena.opponent_speed,
            arena,
            score: Score::new(),
            flags: SessionFlags::default(),
            events: Events::new(),
        }
    }

    /// Start (or restart) a session on `arena`
    ///
    /// Returns true when a game-over overlay from a previous game is still
    /// showing and has to be dismissed by the host.
    pub fn reset(&mut self, arena: Arena) -> bool {
        let dismiss_overlay = self.flags.is_game_over && !self.flags.is_new_game;

        self.world.clear();
        spawn_entities(&mut self.world, &arena);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(arena.center(), Params::SERVE_SPEED_Y);
        }

        // Escalation survives restarts
        self.opponent_speed = if self.flags.opponent_escalated {
            Params::ESCALATED_OPPONENT_SPEED
        } else {
            arena.opponent_speed
        };

        self.score = Score::new();
        self.events.clear();
        self.flags.is_game_over = false;
        self.flags.is_new_game = false;

        info!(
            width = arena.width,
            height = arena.height,
            win_score = arena.win_score,
            opponent_speed = self.opponent_speed,
            "Session started"
        );
        self.arena = arena;

        dismiss_overlay
    }

    /// Pointer moved to canvas-relative `raw_x`
    pub fn set_player_paddle_target(&mut self, raw_x: f32) {
        apply_pointer(&mut self.world, &self.arena, &mut self.flags, raw_x);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Read-only view for the render adapter
    pub fn snapshot(&self) -> Snapshot<'_> {
        let ball = self.ball().unwrap_or_else(|| Ball::new(self.arena.center(), Vec2::ZERO));
        let centered = self.arena.centered_paddle_x();
        let player_x = self.paddle(Side::Player).map_or(centered, |p| p.x);
        let computer_x = self.paddle(Side::Computer).map_or(centered, |p| p.x);

        let active_half = if ball.pos.y < self.arena.height / 2.0 {
            Side::Computer
        } else {
            Side::Player
        };

        Snapshot {
            arena: &self.arena,
            ball_pos: ball.pos,
            player_x,
            computer_x,
            score: self.score,
            active_half,
            pointer_tracking: self.flags.pointer_tracking,
            is_game_over: self.flags.is_game_over,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub arena: &'a Arena,
    pub ball_pos: Vec2,
    pub player_x: f32,
    pub computer_x: f32,
    pub score: Score,
    /// Half of the arena the ball is in; its owner's label is highlighted
    pub active_half: Side,
    pub pointer_tracking: bool,
    pub is_game_over: bool,
}

fn spawn_entities(world: &mut World, arena: &Arena) {
    let paddle_x = arena.centered_paddle_x();
    create_paddle(world, Side::Computer, paddle_x);
    create_paddle(world, Side::Player, paddle_x);
    create_ball(world, arena.center(), Vec2::splat(arena.ball_speed));
}
