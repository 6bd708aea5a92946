//! Golden kernel test: runs the frozen known-answer vectors and asserts
//! every result matches the permanent v1 value.
//!
//! These values must NEVER be edited to match new behavior.
//! If this fails, the kernel has been broken.

use std::path::PathBuf;

use intbench_kernel::kernel::{matmul_and_hash, SUPPORTED_DIMENSIONS};
use intbench_kernel::vectors::{load_vectors, KernelVector};
use intbench_kernel::KERNEL_VERSION;

fn golden_vectors() -> Vec<KernelVector> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("kernel_vectors.json");
    load_vectors(&path).unwrap_or_else(|e| panic!("Failed to load golden vectors: {}", e))
}

#[test]
fn golden_vectors_match() {
    let vectors = golden_vectors();
    assert!(!vectors.is_empty(), "golden fixture is empty");

    for v in &vectors {
        let check = v.check().expect("golden vector uses a supported dimension");
        assert_eq!(
            check.first, v.expected,
            "GOLDEN TEST FAILED: n={} seed={}\n\
             Got:      {}\n\
             Expected: {}",
            v.dimension, v.seed, check.first, v.expected
        );
    }
}

#[test]
fn golden_vectors_are_deterministic() {
    for v in &golden_vectors() {
        let check = v.check().unwrap();
        assert!(
            check.deterministic(),
            "DETERMINISM FAILURE: n={} seed={}\n\
             Run 1: {}\n\
             Run 2: {}",
            v.dimension, v.seed, check.first, check.second
        );
    }
}

#[test]
fn golden_vectors_cover_both_benchmark_sizes() {
    let vectors = golden_vectors();
    for n in [4, 64] {
        assert!(
            vectors.iter().any(|v| v.dimension == n && v.seed == 5281),
            "missing golden vector for n={} seed=5281",
            n
        );
    }
    for v in &vectors {
        assert!(SUPPORTED_DIMENSIONS.contains(&v.dimension));
    }
}

#[test]
fn golden_three_step_chain() {
    let mut seed = 5281;
    for _ in 0..3 {
        seed = matmul_and_hash::<4>(seed);
    }
    assert_eq!(seed, 12786693222308657860);
}

#[test]
fn kernel_version_is_one() {
    assert_eq!(KERNEL_VERSION, 1, "KERNEL_VERSION must be 1 and never change");
}
