//! intbench kernel v1: Arithmetic Primitives
//!
//! All values are u64. Every operation wraps modulo 2^64.
//! Overflow is part of the computation, never an error.

/// Wrapping multiply-accumulate: `acc + a * b (mod 2^64)`.
#[inline(always)]
pub fn mul_add(acc: u64, a: u64, b: u64) -> u64 {
    acc.wrapping_add(a.wrapping_mul(b))
}

/// Row-major linear index `i * n + j`, widened to u64 with wraparound.
#[inline(always)]
pub fn linear_index(i: usize, j: usize, n: usize) -> u64 {
    (i as u64).wrapping_mul(n as u64).wrapping_add(j as u64)
}

/// Anti-diagonal offset `i + j + 1`, widened to u64 with wraparound.
#[inline(always)]
pub fn diagonal_offset(i: usize, j: usize) -> u64 {
    (i as u64).wrapping_add(j as u64).wrapping_add(1)
}
