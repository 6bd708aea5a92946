//! Driver: chains the kernel from a fixed seed and times the loop.
//!
//! Idle -> Running -> Done. No early exit, no cancellation.

use std::hint::black_box;
use std::time::Duration;

use intbench_kernel::kernel::KernelFn;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::variant::Variant;

/// Replace `seed` with `kernel(seed)` exactly `iterations` times.
///
/// Zero iterations return the seed unchanged.
pub fn run_chain(kernel: KernelFn, seed: u64, iterations: u64) -> u64 {
    let mut result = seed;
    for _ in 0..iterations {
        result = kernel(black_box(result));
    }
    result
}

/// Result of one timed benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchOutcome {
    pub variant: Variant,
    pub result: u64,
    pub elapsed: Duration,
}

impl BenchOutcome {
    /// Kernel calls per second.
    pub fn ops_per_sec(&self) -> f64 {
        self.variant.iterations as f64 / self.elapsed.as_secs_f64()
    }

    /// Scalar multiply-accumulates per second: iterations * N^3 / seconds.
    pub fn matrix_ops_per_sec(&self) -> f64 {
        self.variant.iterations as f64 * self.variant.matrix_ops_per_iteration() as f64
            / self.elapsed.as_secs_f64()
    }
}

pub struct Driver<C: Clock> {
    clock: C,
}

impl<C: Clock> Driver<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run the variant's full chain and measure wall-clock time around it.
    pub fn run(&self, variant: &Variant) -> BenchOutcome {
        debug!(
            variant = variant.name,
            iterations = variant.iterations,
            seed = variant.initial_seed,
            "running"
        );

        let start = self.clock.now();
        let result = run_chain(variant.kernel, variant.initial_seed, variant.iterations);
        let elapsed = self.clock.elapsed_since(start);

        debug!(variant = variant.name, elapsed_ns = elapsed.as_nanos() as u64, "done");
        info!(variant = variant.name, result, "benchmark finished");

        BenchOutcome { variant: *variant, result, elapsed }
    }
}
