//! Engine — the particle simulation.
//!
//! Generates the population and advances it one tick at a time. The engine
//! never touches a surface; the renderer reads a `Show` and the driver
//! replaces it with `Show::advance` once the frame is painted.

pub mod factory;
pub mod step;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::types::Firework;

/// One tick's immutable snapshot of the whole population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub width: u32,
    pub height: u32,
    pub tick: u64,
    pub fireworks: Vec<Firework>,
}

impl Show {
    pub fn new(
        width: u32,
        height: u32,
        max_fireworks: usize,
        max_sparks: usize,
        rng: &mut impl RandomSource,
    ) -> Self {
        Show {
            width,
            height,
            tick: 0,
            fireworks: factory::generate_fireworks(width, height, max_fireworks, max_sparks, rng),
        }
    }

    /// The next snapshot. Population order and size are preserved.
    pub fn advance(&self, rng: &mut impl RandomSource) -> Show {
        Show {
            width: self.width,
            height: self.height,
            tick: self.tick + 1,
            fireworks: self
                .fireworks
                .iter()
                .map(|fw| step::update(self.width, self.height, fw, rng))
                .collect(),
        }
    }

    pub fn exploded(&self) -> usize {
        self.fireworks.iter().filter(|fw| fw.is_exploded()).count()
    }
}
