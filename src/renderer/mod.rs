//! Renderer — paints a population onto a drawing surface.
//!
//! The renderer never mutates simulation state. Apart from the jitter on
//! ascending trails, which pulls from the supplied random source, the same
//! firework always produces the same paint operations.

mod canvas;
mod recorder;

pub use canvas::Canvas;
pub use recorder::{PaintOp, Recorder};

use crate::random::RandomSource;
use crate::types::{Firework, Phase, Rgba};

/// Side length of every painted square.
pub const RADIUS: f64 = 4.0;
/// Squares in the trail behind an ascending firework.
pub const FLIGHT_TRAIL: usize = 15;
/// Segments painted per spark while exploding.
pub const SPARK_TRAIL: usize = 10;

/// A 2D surface with path-based filling.
///
/// Implementations must tolerate out-of-range channels and positions:
/// colors are clamped and anything outside the surface is clipped.
pub trait Surface {
    fn begin_path(&mut self);
    fn set_fill(&mut self, color: Rgba);
    fn rect(&mut self, x: f64, y: f64, side: f64);
    fn fill(&mut self);
    fn clear(&mut self);
}

/// Fill one opaque `RADIUS` square.
pub fn fill(surface: &mut impl Surface, x: f64, y: f64, channels: &[i32]) {
    surface.begin_path();
    surface.set_fill(Rgba::from_channels(channels));
    surface.rect(x, y, RADIUS);
    surface.fill();
}

/// Paint one firework's contribution to the frame.
///
/// `index` is the firework's position in the population; it tints the
/// flight trail.
pub fn draw(surface: &mut impl Surface, firework: &Firework, index: usize, rng: &mut impl RandomSource) {
    let x = firework.x as f64;
    let y = firework.y;

    match firework.phase {
        Phase::Fly => {
            let tint = (index as i32).saturating_mul(50);
            for i in 0..FLIGHT_TRAIL {
                let step = i as f64;
                let jitter = rng.next_unit() * step - step / 2.0;
                fill(surface, x + jitter, y + step * RADIUS, &[tint, i as i32 * 17]);
            }
        }
        Phase::Explode => {
            let age = firework.age as f64;
            for spark in &firework.sparks {
                for i in 0..SPARK_TRAIL {
                    let trail_age = age + i as f64;
                    let fade = i as f64 * 20.0 - age * 2.0;
                    let droop = (spark.weight * trail_age).powi(2);
                    let channels = spark.channels.map(|flag| (flag as f64 * fade).floor() as i32);
                    fill(
                        surface,
                        x + spark.vx * trail_age,
                        y + spark.vy * trail_age + droop,
                        &channels,
                    );
                }
            }
        }
    }
}

/// Clear the surface and paint every firework in population order.
pub fn draw_frame(surface: &mut impl Surface, fireworks: &[Firework], rng: &mut impl RandomSource) {
    surface.clear();
    for (index, firework) in fireworks.iter().enumerate() {
        draw(surface, firework, index, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, ScriptedRandom};
    use crate::types::Spark;

    fn firework(phase: Phase, age: u32, sparks: Vec<Spark>) -> Firework {
        Firework {
            x: 100,
            y: 300.0,
            age,
            phase,
            sparks,
        }
    }

    fn fills(rec: &Recorder) -> Vec<(f64, f64, Rgba)> {
        rec.ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Fill { x, y, color, .. } => Some((*x, *y, *color)),
                PaintOp::Clear => None,
            })
            .collect()
    }

    #[test]
    fn flight_trail_is_fifteen_tinted_squares() {
        let mut rec = Recorder::default();
        let mut rng = FixedRandom(0.5);
        draw(&mut rec, &firework(Phase::Fly, 0, Vec::new()), 2, &mut rng);

        let painted = fills(&rec);
        assert_eq!(painted.len(), FLIGHT_TRAIL);
        for (i, (x, y, color)) in painted.iter().enumerate() {
            // jitter of 0.5 * i - i / 2 cancels out
            assert_eq!(*x, 100.0);
            assert_eq!(*y, 300.0 + i as f64 * RADIUS);
            assert_eq!(*color, Rgba { r: 100, g: i as i32 * 17, b: 0, a: 1.0 });
        }
    }

    #[test]
    fn flight_jitter_spreads_with_trail_step() {
        let mut rec = Recorder::default();
        let mut rng = FixedRandom(0.0);
        draw(&mut rec, &firework(Phase::Fly, 0, Vec::new()), 0, &mut rng);
        let painted = fills(&rec);
        assert_eq!(painted[0].0, 100.0);
        assert_eq!(painted[14].0, 93.0);
    }

    #[test]
    fn flying_ignores_sparks() {
        let spark = Spark { vx: 3.0, vy: 3.0, weight: 0.1, channels: [1, 1, 1] };
        let mut rec = Recorder::default();
        draw(&mut rec, &firework(Phase::Fly, 0, vec![spark; 4]), 0, &mut FixedRandom(0.5));
        assert_eq!(fills(&rec).len(), FLIGHT_TRAIL);
    }

    #[test]
    fn spark_trail_positions_and_fade() {
        let spark = Spark { vx: 2.0, vy: -1.0, weight: 0.5, channels: [1, 0, 1] };
        let mut rec = Recorder::default();
        let mut rng = ScriptedRandom::new(Vec::new());
        draw(&mut rec, &firework(Phase::Explode, 4, vec![spark]), 0, &mut rng);

        let painted = fills(&rec);
        assert_eq!(painted.len(), SPARK_TRAIL);
        assert_eq!(rng.drawn(), 0);

        // i = 0: trail_age 4, fade -8
        assert_eq!(painted[0].0, 108.0);
        assert_eq!(painted[0].1, 300.0 - 4.0 + 4.0);
        assert_eq!(painted[0].2, Rgba { r: -8, g: 0, b: -8, a: 1.0 });

        // i = 9: trail_age 13, fade 172
        assert_eq!(painted[9].0, 126.0);
        assert_eq!(painted[9].1, 300.0 - 13.0 + 42.25);
        assert_eq!(painted[9].2, Rgba { r: 172, g: 0, b: 172, a: 1.0 });
    }

    #[test]
    fn explosion_paints_every_spark() {
        let spark = Spark { vx: 1.0, vy: 1.0, weight: 0.1, channels: [0, 1, 0] };
        let mut rec = Recorder::default();
        draw(&mut rec, &firework(Phase::Explode, 0, vec![spark; 7]), 0, &mut FixedRandom(0.0));
        assert_eq!(fills(&rec).len(), 7 * SPARK_TRAIL);
    }

    #[test]
    fn frame_clears_once_then_paints_in_order() {
        let fireworks = vec![
            firework(Phase::Fly, 0, Vec::new()),
            firework(Phase::Fly, 0, Vec::new()),
        ];
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &fireworks, &mut FixedRandom(0.5));

        assert_eq!(rec.ops()[0], PaintOp::Clear);
        let painted = fills(&rec);
        assert_eq!(painted.len(), 2 * FLIGHT_TRAIL);
        assert_eq!(painted[0].2.r, 0);
        assert_eq!(painted[FLIGHT_TRAIL].2.r, 50);
    }

    #[test]
    fn redrawing_same_state_repeats_operations() {
        let spark = Spark { vx: -1.5, vy: 2.5, weight: 0.2, channels: [1, 1, 0] };
        let fireworks = vec![
            firework(Phase::Fly, 0, vec![spark.clone()]),
            firework(Phase::Explode, 12, vec![spark]),
        ];
        let script = vec![0.1, 0.7, 0.3, 0.9];

        let mut first = Recorder::default();
        draw_frame(&mut first, &fireworks, &mut ScriptedRandom::new(script.clone()));
        let mut second = Recorder::default();
        draw_frame(&mut second, &fireworks, &mut ScriptedRandom::new(script));

        assert_eq!(first.ops(), second.ops());
    }
}
