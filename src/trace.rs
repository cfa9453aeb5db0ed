//! Headless recording of a show.
//!
//! Runs the same render-then-step loop as the player against a `Recorder`
//! and collects every tick's paint operations.

use serde::{Deserialize, Serialize};

use crate::engine::Show;
use crate::random::RandomSource;
use crate::renderer::{self, PaintOp, Recorder};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickTrace {
    pub tick: u64,
    pub exploded: usize,
    pub ops: Vec<PaintOp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub width: u32,
    pub height: u32,
    pub ticks: Vec<TickTrace>,
}

/// Record `ticks` frames starting from `show`. Returns the trace and the
/// snapshot left after the last step.
pub fn record(show: Show, ticks: usize, rng: &mut impl RandomSource) -> (Trace, Show) {
    let mut recorder = Recorder::default();
    let mut frames = Vec::with_capacity(ticks);
    let mut show = show;

    for _ in 0..ticks {
        renderer::draw_frame(&mut recorder, &show.fireworks, rng);
        frames.push(TickTrace {
            tick: show.tick,
            exploded: show.exploded(),
            ops: recorder.take(),
        });
        show = show.advance(rng);
    }

    let trace = Trace {
        width: show.width,
        height: show.height,
        ticks: frames,
    };
    (trace, show)
}
