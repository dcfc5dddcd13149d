// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Uniform random variates for the `random*` operations.
//!
//! Random operations come in two forms: the plain form draws from the
//! process-wide default (`rand::thread_rng()`, confined to the calling
//! thread), the `*_with` form takes any [`RandomSource`] so callers can seed
//! and reproduce sequences with [`Prng`].

use rand::{Rng, RngCore};

/// A source of uniform variates in `[0, 1)`.
///
/// Blanket-implemented for every [`rand::RngCore`], including [`Prng`].
pub trait RandomSource {
    /// Returns the next value, uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Runs `f` against the thread-local default source.
pub(crate) fn with_default<T>(f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
    let mut rng = rand::thread_rng();
    f(&mut rng)
}

/// Returns a value uniform in `[0, 1)` from the default source.
pub fn random() -> f64 {
    with_default(|rng| rng.next_f64())
}

/// Returns a value uniform in `[min, max)` from the default source.
pub fn random_range(min: f64, max: f64) -> f64 {
    random_range_with(&mut rand::thread_rng(), min, max)
}

/// Returns `floor(random_range(min, max))` from the default source.
///
/// With integer bounds the result lies in `[min, max)`. With fractional bounds
/// the integers at either end are under-represented: this is a floor of a
/// continuous draw, not a uniform integer distribution.
pub fn random_range_int(min: f64, max: f64) -> i64 {
    random_range_int_with(&mut rand::thread_rng(), min, max)
}

/// [`random_range`] drawing from `rng`.
pub fn random_range_with<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.next_f64() * (max - min) + min
}

/// [`random_range_int`] drawing from `rng`.
#[allow(clippy::cast_possible_truncation)]
pub fn random_range_int_with<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    random_range_with(rng, min, max).floor() as i64
}

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; intended for reproducible simulation and
///   tests.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    ///
    /// An all-zero seed is replaced by a fixed non-zero state, since
    /// xoroshiro never leaves the zero state.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        Self::from_seed(splitmix64(&mut sm_state), splitmix64(&mut sm_state))
    }

    fn step(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        // High bits of xoroshiro128+ are the strongest.
        #[allow(clippy::cast_possible_truncation)]
        let hi = (self.step() >> 32) as u32;
        hi
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_seeds_produce_matching_sequences() {
        let mut a = Prng::from_seed_u64(7);
        let mut b = Prng::from_seed_u64(7);
        for _ in 0..32 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut prng = Prng::from_seed(0xDEAD_BEEF, 0xFACE_FEED);
        for _ in 0..10_000 {
            let v = prng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} escaped [0, 1)");
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut prng = Prng::from_seed(0, 0);
        let first = prng.next_u64();
        let second = prng.next_u64();
        assert_ne!(first, second);
    }

    #[test]
    fn range_int_stays_within_integer_bounds() {
        let mut prng = Prng::from_seed_u64(99);
        for _ in 0..1_000 {
            let v = random_range_int_with(&mut prng, -3.0, 4.0);
            assert!((-3..4).contains(&v), "{v} escaped [-3, 4)");
        }
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut prng = Prng::from_seed_u64(3);
        let mut buf = [0_u8; 13];
        prng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
