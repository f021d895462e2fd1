use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks one caption from `captions`, deterministically for a given `seed`.
///
/// Returns `None` for an empty list.
pub fn pick<S: AsRef<str>>(
    seed: u64,
    captions: &[S],
) -> Option<&str> {
    let mut rng = StdRng::seed_from_u64(seed);
    captions.choose(&mut rng).map(AsRef::as_ref)
}
