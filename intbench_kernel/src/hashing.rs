//! intbench kernel v1: Seeded FNV-1a
//!
//! 64-bit FNV-1a over u64 words (not bytes), with the offset basis
//! pre-mixed with the seed:
//!
//!   hash = seed ^ FNV_OFFSET_BASIS
//!   for each word x, row-major: hash = (hash ^ x) * FNV_PRIME
//!
//! Traversal order is part of the result. Do not reorder.

/// Standard FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// Standard FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 1_099_511_628_211;

/// Hash any word sequence in iteration order.
pub fn fnv1a_hash64_words(words: impl IntoIterator<Item = u64>, seed: u64) -> u64 {
    words
        .into_iter()
        .fold(seed ^ FNV_OFFSET_BASIS, |hash, x| (hash ^ x).wrapping_mul(FNV_PRIME))
}

/// Hash a row-major grid: every row in order, every column in order.
#[inline(never)]
pub fn fnv1a_hash64<const N: usize>(rows: &[[u64; N]], seed: u64) -> u64 {
    fnv1a_hash64_words(rows.iter().flatten().copied(), seed)
}
