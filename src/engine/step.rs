//! Per-tick state transition for a single firework.

use log::debug;

use crate::random::RandomSource;
use crate::types::{Firework, Phase};

use super::factory;

/// Rows climbed per tick while flying.
pub const ASCENT_PER_TICK: f64 = 10.0;
/// Flying below this row forces detonation.
pub const APEX_Y: f64 = 200.0;
/// Chance per tick of detonating early.
pub const SPONTANEOUS_DETONATION: f64 = 0.001;
/// Explosions younger than this never relaunch.
pub const MIN_EXPLOSION_AGE: u32 = 100;
/// Chance per tick of relaunching once old enough.
pub const RELAUNCH_CHANCE: f64 = 0.05;

/// Returns the firework's value for the next tick.
///
/// A relaunched firework gets a fresh spark set of the same length, so the
/// spark count of a population never changes.
pub fn update(width: u32, height: u32, firework: &Firework, rng: &mut impl RandomSource) -> Firework {
    match firework.phase {
        Phase::Fly => {
            let detonate = rng.next_unit() < SPONTANEOUS_DETONATION || firework.y < APEX_Y;
            if detonate {
                debug!("firework at x={} exploded at y={}", firework.x, firework.y);
            }
            Firework {
                y: firework.y - ASCENT_PER_TICK,
                phase: if detonate { Phase::Explode } else { Phase::Fly },
                ..firework.clone()
            }
        }
        Phase::Explode => {
            if firework.age > MIN_EXPLOSION_AGE && rng.next_unit() < RELAUNCH_CHANCE {
                let next = factory::launch(width, height, firework.sparks.len(), rng);
                debug!("firework at x={} relaunched from x={}", firework.x, next.x);
                return next;
            }
            Firework {
                age: firework.age.saturating_add(1),
                ..firework.clone()
            }
        }
    }
}
