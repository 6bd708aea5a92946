//! Runtime error type. The kernel itself cannot fail; these cover output
//! and result verification.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("determinism failure: run 1 = {first}, run 2 = {second}")]
    Determinism { first: u64, second: u64 },

    #[error("result mismatch: expected {expected}, got {actual}")]
    GoldenMismatch { expected: u64, actual: u64 },
}
