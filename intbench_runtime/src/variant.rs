//! Benchmark variants. Every parameter is a compile-time constant.

use intbench_kernel::kernel::{matmul_and_hash, KernelFn};

/// Seed the chain starts from in every variant.
pub const INITIAL_SEED: u64 = 5281;

/// Which console layout a variant reports with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Result, unit-scaled duration, whole ops/sec.
    Compact,
    /// Framed by blank lines, with matrix size and matrix ops/sec.
    Matrix,
}

#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub name: &'static str,
    pub dimension: usize,
    pub iterations: u64,
    pub initial_seed: u64,
    pub kernel: KernelFn,
    pub style: ReportStyle,
}

/// Variant A: many cheap 4x4 steps.
pub const SMALL: Variant = Variant {
    name: "4x4",
    dimension: 4,
    iterations: 1_000_000,
    initial_seed: INITIAL_SEED,
    kernel: matmul_and_hash::<4>,
    style: ReportStyle::Compact,
};

/// Variant B: fewer, heavier 64x64 steps.
pub const LARGE: Variant = Variant {
    name: "64x64",
    dimension: 64,
    iterations: 10_000,
    initial_seed: INITIAL_SEED,
    kernel: matmul_and_hash::<64>,
    style: ReportStyle::Matrix,
};

impl Variant {
    /// Same variant with a different iteration count.
    pub fn with_iterations(self, iterations: u64) -> Self {
        Self { iterations, ..self }
    }

    /// Scalar multiply-accumulates per kernel call: N^3.
    pub fn matrix_ops_per_iteration(&self) -> u64 {
        let n = self.dimension as u64;
        n * n * n
    }
}
