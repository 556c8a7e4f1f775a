use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator for one generation run. A fixed seed makes the placement draws
/// and the fill reproducible; `None` seeds from OS entropy.
pub fn run_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generator owned by a single placement worker.
pub fn task_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
