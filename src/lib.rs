//! Terminal fireworks.
//!
//! The crate is split the same way a frame moves through it:
//! - `engine`: population generation and the per-tick state step
//! - `renderer`: paints a population onto any `Surface`
//! - `player`: the terminal driver that runs render-then-step on a timer

pub mod config;
pub mod engine;
pub mod menubar;
pub mod player;
pub mod random;
pub mod renderer;
pub mod trace;
pub mod types;
