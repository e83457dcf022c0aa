use rand::Rng;

/// Unbiased in-place Fisher–Yates permutation: walk from the last index
/// down to 1, swapping with a uniformly chosen earlier-or-equal index.
/// Callers hand in the rng, so every deal shuffles independently and
/// tests can seed a deterministic one.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
