//! Secure random selection primitives.
//!
//! Every draw comes from the operating system CSPRNG. Nothing here is
//! seedable and no generator state is reused across calls.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// Uniform index in `0..bound`.
///
/// Panics if `bound` is zero; callers guarantee a non-empty range.
#[inline]
pub fn index(bound: usize) -> usize {
    OsRng.gen_range(0..bound)
}

/// Uniformly chosen element of a non-empty byte set.
#[inline]
pub fn choose(set: &[u8]) -> u8 {
    set[index(set.len())]
}

/// Unbiased in-place shuffle (Fisher-Yates, one fresh draw per swap).
#[inline]
pub fn shuffle(bytes: &mut [u8]) {
    bytes.shuffle(&mut OsRng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_bounds() {
        for _ in 0..1000 {
            assert!(index(7) < 7);
        }
        assert_eq!(index(1), 0);
    }

    #[test]
    fn choose_returns_member() {
        let set = b"abc123";
        for _ in 0..100 {
            assert!(set.contains(&choose(set)));
        }
    }

    #[test]
    fn shuffle_preserves_contents() {
        let mut bytes = *b"abcdefghij";
        shuffle(&mut bytes);
        let mut sorted = bytes;
        sorted.sort_unstable();
        assert_eq!(&sorted, b"abcdefghij");
    }
}
