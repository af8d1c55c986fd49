use crate::PseudoRandomNumberGenerator;

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns `count` distinct elements of the slice, in the order they were drawn.
///
/// Runs a partial Fisher-Yates shuffle over the indices of the slice, so every element is drawn
/// at most once. Returns [`None`] if the slice has fewer than `count` elements.
pub fn sample<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
    count: usize,
) -> Option<Vec<&'a T>> {
    if count > slice.len() {
        return None;
    }
    let len = slice.len() as u64;
    let mut indices = (0..slice.len()).collect::<Vec<_>>();
    for i in 0..count {
        let next = range(prng, i as u64, len) as usize;
        indices.swap(i, next);
    }
    Some(indices[..count].iter().map(|&i| &slice[i]).collect())
}
