//! Population generation.

use crate::random::RandomSource;
use crate::types::{Firework, Phase, Spark};

const SPEED_MIN: f64 = 0.5;
const SPEED_SPAN: f64 = 5.0;
const WEIGHT_MIN: f64 = 0.03;
const WEIGHT_SPAN: f64 = 0.3;

/// A firework on the launch line with no sparks attached.
pub fn init_firework(width: u32, height: u32, rng: &mut impl RandomSource) -> Firework {
    Firework {
        x: (rng.next_unit() * width as f64).floor() as u32,
        y: height as f64,
        age: 0,
        phase: Phase::Fly,
        sparks: Vec::new(),
    }
}

/// `count` independent sparks.
pub fn generate_sparks(count: usize, rng: &mut impl RandomSource) -> Vec<Spark> {
    (0..count).map(|_| spark(rng)).collect()
}

fn spark(rng: &mut impl RandomSource) -> Spark {
    let vx = rng.next_unit() * SPEED_SPAN + SPEED_MIN;
    let vy = rng.next_unit() * SPEED_SPAN + SPEED_MIN;
    let vx = if rng.next_unit() > 0.5 { -vx } else { vx };
    let vy = if rng.next_unit() > 0.5 { -vy } else { vy };
    let weight = rng.next_unit() * WEIGHT_SPAN + WEIGHT_MIN;
    let mut flag = || (rng.next_unit() * 2.0).floor() as u8;
    let channels = [flag(), flag(), flag()];
    Spark {
        vx,
        vy,
        weight,
        channels,
    }
}

/// A firework on the launch line with a fresh spark set.
pub fn launch(width: u32, height: u32, max_sparks: usize, rng: &mut impl RandomSource) -> Firework {
    let mut firework = init_firework(width, height, rng);
    firework.sparks = generate_sparks(max_sparks, rng);
    firework
}

pub fn generate_fireworks(
    width: u32,
    height: u32,
    max_fireworks: usize,
    max_sparks: usize,
    rng: &mut impl RandomSource,
) -> Vec<Firework> {
    (0..max_fireworks)
        .map(|_| launch(width, height, max_sparks, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::random::{FixedRandom, RngSource, ScriptedRandom};

    #[test]
    fn fireworks_start_on_the_launch_line() {
        let mut rng = RngSource(StdRng::seed_from_u64(1));
        let fireworks = generate_fireworks(800, 500, 20, 50, &mut rng);
        assert_eq!(fireworks.len(), 20);
        for fw in &fireworks {
            assert!(fw.x < 800);
            assert_eq!(fw.y, 500.0);
            assert_eq!(fw.age, 0);
            assert_eq!(fw.phase, Phase::Fly);
            assert_eq!(fw.sparks.len(), 50);
        }
    }

    #[test]
    fn sparks_stay_within_bounds() {
        let mut rng = RngSource(StdRng::seed_from_u64(99));
        for spark in generate_sparks(2000, &mut rng) {
            assert!((0.03..0.33).contains(&spark.weight), "weight {}", spark.weight);
            assert!((0.5..5.5).contains(&spark.vx.abs()), "vx {}", spark.vx);
            assert!((0.5..5.5).contains(&spark.vy.abs()), "vy {}", spark.vy);
            assert!(spark.channels.iter().all(|&f| f <= 1));
        }
    }

    #[test]
    fn zero_counts_are_well_formed() {
        let mut rng = FixedRandom(0.5);
        assert!(generate_fireworks(800, 500, 0, 50, &mut rng).is_empty());

        let sparkless = generate_fireworks(800, 500, 3, 0, &mut rng);
        assert_eq!(sparkless.len(), 3);
        assert!(sparkless.iter().all(|fw| fw.sparks.is_empty()));
    }

    #[test]
    fn spark_draws_follow_documented_order() {
        // magnitudes, signs, weight, then red/green/blue
        let mut rng = ScriptedRandom::new(vec![0.0, 1.0 - 1e-9, 0.9, 0.1, 0.5, 0.7, 0.2, 0.6]);
        let sparks = generate_sparks(1, &mut rng);
        let s = &sparks[0];
        assert_eq!(s.vx, -0.5);
        assert!(s.vy > 5.49 && s.vy < 5.5);
        assert!((s.weight - 0.18).abs() < 1e-12);
        assert_eq!(s.channels, [1, 0, 1]);
        assert_eq!(rng.drawn(), 8);
    }

    #[test]
    fn x_is_floored_from_the_first_draw() {
        let mut rng = FixedRandom(0.99999);
        assert_eq!(init_firework(800, 500, &mut rng).x, 799);
        let mut rng = FixedRandom(0.0);
        assert_eq!(init_firework(800, 500, &mut rng).x, 0);
    }
}
