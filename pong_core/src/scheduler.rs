//! Frame scheduling boundary between a host loop and the simulation
//!
//! The host owns the actual timer (`requestAnimationFrame`, a test loop, ...)
//! and calls [`Scheduler::tick`] once per display refresh. The return value
//! says whether another frame should be requested.

use tracing::debug;

use crate::{step, GameOver, SimulationState, Snapshot};

/// Presentation side of the game: draws frames and shows the result
pub trait Presenter {
    fn render(&mut self, frame: &Snapshot<'_>);
    fn game_over(&mut self, outcome: &GameOver);
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Request another frame
    Continue,
    /// Game over; stop requesting frames until the session restarts
    Halt,
}

/// Drives the frame step until the game ends
#[derive(Debug, Default)]
pub struct Scheduler {
    frames: u64,
    halted: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame: render, step, and notify on game over
    pub fn tick<P: Presenter>(&mut self, state: &mut SimulationState, presenter: &mut P) -> Tick {
        if self.halted {
            return Tick::Halt;
        }

        presenter.render(&state.snapshot());
        self.frames += 1;

        match step(state) {
            Some(outcome) => {
                self.halted = true;
                debug!(frames = self.frames, "Scheduler halted");
                // Final frame so the winning score is on screen under the overlay
                presenter.render(&state.snapshot());
                presenter.game_over(&outcome);
                Tick::Halt
            }
            None => Tick::Continue,
        }
    }

    /// Allow ticking again after the host has reset the session
    pub fn resume(&mut self) {
        self.halted = false;
        self.frames = 0;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Frames run since the last resume
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
