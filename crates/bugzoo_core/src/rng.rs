//! Deterministic randomness for creature generation.
//!
//! [`SeededRng`] is a mulberry32 stream over unsigned 32-bit wrapping
//! arithmetic. Identical seeds and call sequences yield bit-identical draws,
//! which is what makes a pasted snippet always hatch the same zoo.

use crate::error::{ZooError, ZooResult};
use rand::{RngCore, SeedableRng};

const GOLDEN_STEP: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Collapses text into a 32-bit seed (djb2: `hash * 33 + unit`).
///
/// Hashes UTF-16 code units so that non-ASCII text seeds the same way it
/// does in browser builds of the zoo.
#[must_use]
pub fn hash_string_to_seed(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(5381u32, |hash, unit| hash.wrapping_mul(33).wrapping_add(u32::from(unit)))
}

/// Seeded mulberry32 generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from the djb2 hash of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(hash_string_to_seed(text))
    }

    fn mix(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_STEP);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t ^= (t ^ (t >> 7)).wrapping_mul(t | 61);
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.mix()) / TWO_POW_32
    }

    /// Next value in `[min, max)`.
    pub fn rand_range(&mut self, min: f64, max: f64) -> f64 {
        let value = self.next_f64();
        min + value * (max - min)
    }

    /// `floor(rand_range(min, max))` for integer bounds.
    pub fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        self.rand_range(min as f64, max as f64).floor() as i64
    }

    /// Uniform index into a sequence of length `len`, consuming one draw.
    pub fn pick_index(&mut self, len: usize) -> ZooResult<usize> {
        if len == 0 {
            return Err(ZooError::EmptyInput);
        }
        let idx = self.rand_range(0.0, len as f64).floor() as usize;
        Ok(idx.min(len - 1))
    }

    /// Uniform choice over a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> ZooResult<&'a T> {
        let idx = self.pick_index(items.len())?;
        Ok(&items[idx])
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.mix()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.mix());
        let lo = u64::from(self.mix());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.mix().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keeps the low 32 bits so `seed_from_u64(n)` matches `new(n as u32)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
