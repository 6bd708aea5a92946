//! intbench kernel v1: Matrix Multiply + Hash
//!
//! The unit of repeated work. Pure and total over every u64 seed:
//!   1. A[i][j] = seed ^ (i*N + j)
//!   2. B[i][j] = seed ^ (i + j + 1)
//!   3. C = A x B (mod 2^64)
//!   4. return fnv1a(C, seed)

use crate::hashing::fnv1a_hash64;
use crate::matrix::Matrix;

/// A monomorphized kernel: seed in, next seed out.
pub type KernelFn = fn(u64) -> u64;

/// Dimensions with a monomorphized kernel available through `kernel_for`.
pub const SUPPORTED_DIMENSIONS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

/// Run one kernel step for a compile-time dimension `N`.
///
/// Never inlined, so a chain of calls from a constant seed stays opaque
/// to the optimizer.
#[inline(never)]
pub fn matmul_and_hash<const N: usize>(seed: u64) -> u64 {
    #[allow(clippy::let_unit_value)]
    let () = Matrix::<N>::NONZERO;

    let a = Matrix::<N>::seeded_a(seed);
    let b = Matrix::<N>::seeded_b(seed);
    let c = a.multiply(&b);
    fnv1a_hash64(c.rows(), seed)
}

/// Map a runtime dimension to its kernel. `None` for unsupported sizes.
pub fn kernel_for(dimension: usize) -> Option<KernelFn> {
    let kernel: KernelFn = match dimension {
        1 => matmul_and_hash::<1>,
        2 => matmul_and_hash::<2>,
        4 => matmul_and_hash::<4>,
        8 => matmul_and_hash::<8>,
        16 => matmul_and_hash::<16>,
        32 => matmul_and_hash::<32>,
        64 => matmul_and_hash::<64>,
        _ => return None,
    };
    Some(kernel)
}
