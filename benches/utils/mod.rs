pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

//// Utility functions

pub(crate) fn get_random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(0, n as u64 * 4));
    }
    results
}
