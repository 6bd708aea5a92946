//! Result verification: determinism across runs and golden comparison.

use tracing::{debug, warn};

use crate::driver::run_chain;
use crate::error::RuntimeError;
use crate::variant::Variant;

/// Run the variant's chain twice. Returns the (shared) final seed, or
/// `Determinism` if the two runs disagree.
pub fn verify_determinism(variant: &Variant) -> Result<u64, RuntimeError> {
    let first = run_chain(variant.kernel, variant.initial_seed, variant.iterations);
    let second = run_chain(variant.kernel, variant.initial_seed, variant.iterations);

    if first != second {
        warn!(variant = variant.name, first, second, "replays disagree");
        return Err(RuntimeError::Determinism { first, second });
    }
    debug!(variant = variant.name, result = first, "deterministic");
    Ok(first)
}

/// Run the variant's chain once and compare against a recorded result.
pub fn verify_result(variant: &Variant, expected: u64) -> Result<(), RuntimeError> {
    let actual = run_chain(variant.kernel, variant.initial_seed, variant.iterations);
    if actual != expected {
        warn!(variant = variant.name, expected, actual, "golden mismatch");
        return Err(RuntimeError::GoldenMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::SMALL;

    #[test]
    fn test_determinism_holds() {
        let v = SMALL.with_iterations(10);
        let result = verify_determinism(&v).unwrap();
        assert_eq!(result, run_chain(v.kernel, v.initial_seed, 10));
    }

    #[test]
    fn test_determinism_detects_divergence() {
        use std::sync::atomic::{AtomicU64, Ordering};
        static CALLS: AtomicU64 = AtomicU64::new(0);
        fn unstable(seed: u64) -> u64 {
            seed ^ CALLS.fetch_add(1, Ordering::Relaxed)
        }

        let v = SMALL.with_iterations(1);
        let v = crate::variant::Variant { kernel: unstable, ..v };
        assert!(matches!(
            verify_determinism(&v),
            Err(RuntimeError::Determinism { .. })
        ));
    }

    #[test]
    fn test_verify_result() {
        let v = SMALL.with_iterations(1);
        assert!(verify_result(&v, 304243300309797380).is_ok());
        match verify_result(&v, 0) {
            Err(RuntimeError::GoldenMismatch { expected, actual }) => {
                assert_eq!(expected, 0);
                assert_eq!(actual, 304243300309797380);
            }
            other => panic!("expected GoldenMismatch, got {:?}", other),
        }
    }
}
