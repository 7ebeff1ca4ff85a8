//! Uniform index sampling over a secure random source.
//!
//! [`ModuloSampler`] reduces one 32-bit draw modulo the bound. The bias this
//! introduces is below `bound / 2^32`, negligible for character sets of a few
//! dozen entries, and it is what [`crate::generate_password`] uses.
//! [`RejectionSampler`] discards draws from the biased tail for an exact
//! uniform index.

use rand_core::{OsRng, RngCore};

/// Draws an index uniformly from `[0, bound)`.
///
/// `bound` must be non-zero.
pub trait IndexSampler {
    fn draw_index(&mut self, bound: usize) -> usize;
}

fn bound_u32(bound: usize) -> u32 {
    debug_assert!(bound > 0, "bound must be non-zero");
    u32::try_from(bound).unwrap_or(u32::MAX)
}

/// `value mod bound` over one 32-bit draw per index.
#[derive(Debug, Clone, Default)]
pub struct ModuloSampler<R = OsRng> {
    rng: R,
}

impl<R: RngCore> ModuloSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IndexSampler for ModuloSampler<R> {
    fn draw_index(&mut self, bound: usize) -> usize {
        (self.rng.next_u32() % bound_u32(bound)) as usize
    }
}

/// Rejection sampling over 32-bit draws.
#[derive(Debug, Clone, Default)]
pub struct RejectionSampler<R = OsRng> {
    rng: R,
}

impl<R: RngCore> RejectionSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IndexSampler for RejectionSampler<R> {
    fn draw_index(&mut self, bound: usize) -> usize {
        let bound = bound_u32(bound);
        // 2^32 mod bound, the size of the biased tail
        let tail = (u32::MAX % bound).wrapping_add(1) % bound;
        let limit = u32::MAX - tail;
        loop {
            let value = self.rng.next_u32();
            if value <= limit {
                return (value % bound) as usize;
            }
        }
    }
}
