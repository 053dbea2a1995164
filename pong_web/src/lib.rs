//! Browser client for Pong
//!
//! Draws the simulation on a 2D canvas, feeds mouse movement to the player
//! paddle and drives frames with `requestAnimationFrame`.
//! Browser glue only builds for wasm32; layout, input and session logic are
//! plain Rust and tested natively.

#[cfg(target_arch = "wasm32")]
mod app;
pub mod fsm;
pub mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub use app::start;
