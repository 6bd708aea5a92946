//! intbench kernel v1: Fixed-size Matrices
//!
//! `Matrix<N>` is an N x N grid of u64 stored inline as `[[u64; N]; N]`,
//! row-major. No heap allocation. Both inputs are derived from the seed
//! so the optimizer cannot treat them as constants.

use std::ops::Index;

use crate::arithmetic::{diagonal_offset, linear_index, mul_add};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<const N: usize> {
    rows: [[u64; N]; N],
}

impl<const N: usize> Matrix<N> {
    /// Zero dimensions are rejected when the kernel is monomorphized.
    pub const NONZERO: () = assert!(N > 0, "matrix dimension must be positive");

    pub fn zeroed() -> Self {
        Self { rows: [[0; N]; N] }
    }

    /// Build a matrix from a per-cell function `f(i, j)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> u64) -> Self {
        let mut m = Self::zeroed();
        for (i, row) in m.rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = f(i, j);
            }
        }
        m
    }

    pub fn from_rows(rows: [[u64; N]; N]) -> Self {
        Self { rows }
    }

    /// Left operand: `A[i][j] = seed ^ (i*N + j)`.
    pub fn seeded_a(seed: u64) -> Self {
        Self::from_fn(|i, j| seed ^ linear_index(i, j, N))
    }

    /// Right operand: `B[i][j] = seed ^ (i + j + 1)`.
    pub fn seeded_b(seed: u64) -> Self {
        Self::from_fn(|i, j| seed ^ diagonal_offset(i, j))
    }

    /// Standard i-j-k product under wrapping arithmetic.
    ///
    /// The loop order is fixed: every `C[i][j]` is accumulated over `k`
    /// before moving on, the same work a naive triple loop performs.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut c = Self::zeroed();
        for i in 0..N {
            for j in 0..N {
                let mut acc = 0u64;
                for k in 0..N {
                    acc = mul_add(acc, self.rows[i][k], other.rows[k][j]);
                }
                c.rows[i][j] = acc;
            }
        }
        c
    }

    pub fn rows(&self) -> &[[u64; N]; N] {
        &self.rows
    }

    pub fn dimension(&self) -> usize {
        N
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = u64;

    fn index(&self, (i, j): (usize, usize)) -> &u64 {
        &self.rows[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_a_formula() {
        let seed = 5281;
        let a = Matrix::<8>::seeded_a(seed);
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(a[(i, j)], seed ^ (i * 8 + j) as u64);
            }
        }
    }

    #[test]
    fn test_seeded_b_formula() {
        let seed = u64::MAX;
        let b = Matrix::<8>::seeded_b(seed);
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(b[(i, j)], seed ^ (i + j + 1) as u64);
            }
        }
    }

    #[test]
    fn test_seeded_2x2_by_hand() {
        let a = Matrix::<2>::seeded_a(5281);
        let b = Matrix::<2>::seeded_b(5281);
        assert_eq!(a.rows(), &[[5281, 5280], [5283, 5282]]);
        assert_eq!(b.rows(), &[[5280, 5283], [5283, 5282]]);
    }

    #[test]
    fn test_multiply_2x2_by_hand() {
        // 5281*5280 + 5280*5283 = 55777920, etc.
        let c = Matrix::<2>::seeded_a(5281).multiply(&Matrix::<2>::seeded_b(5281));
        assert_eq!(c.rows(), &[[55777920, 55788483], [55799046, 55809613]]);
    }

    #[test]
    fn test_multiply_wraps_near_max() {
        // Entries are -1, -2, -3, -4 (mod 2^64); products of negatives are small.
        let c = Matrix::<2>::seeded_a(u64::MAX).multiply(&Matrix::<2>::seeded_b(u64::MAX));
        assert_eq!(c.rows(), &[[8, 11], [18, 25]]);
    }

    #[test]
    fn test_multiply_matches_u128_reference() {
        let seed = 0x9E37_79B9_7F4A_7C15_u64;
        let a = Matrix::<4>::seeded_a(seed);
        let b = Matrix::<4>::seeded_b(seed);
        let c = a.multiply(&b);
        for i in 0..4 {
            for j in 0..4 {
                let mut wide: u128 = 0;
                for k in 0..4 {
                    wide = (wide + (a[(i, k)] as u128) * (b[(k, j)] as u128)) % (1u128 << 64);
                }
                assert_eq!(c[(i, j)], wide as u64, "C[{}][{}]", i, j);
            }
        }
    }

    #[test]
    fn test_identity_multiply() {
        let id = Matrix::<3>::from_fn(|i, j| u64::from(i == j));
        let m = Matrix::<3>::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.multiply(&id), m);
        assert_eq!(id.multiply(&m), m);
    }

    #[test]
    fn test_dimension() {
        assert_eq!(Matrix::<64>::zeroed().dimension(), 64);
    }
}
