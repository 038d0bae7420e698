use rand::prelude::*;

pub use std::f32::consts::TAU;

/// Build the creation-time random source. A fixed seed makes a whole run
/// reproducible, since nothing after creation draws randomness.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Uniform value in `[min, max)`. Degenerate ranges collapse to `min`.
#[inline]
pub fn range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Biased coin: true with probability `p`.
#[inline]
pub fn chance(rng: &mut impl Rng, p: f32) -> bool {
    rng.gen::<f32>() < p
}
