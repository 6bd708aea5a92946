#![forbid(unsafe_code)]

/// Kernel v1. Results are frozen: any change to output requires kernel_v2.
pub const KERNEL_VERSION: u32 = 1;

pub mod arithmetic;
pub mod matrix;
pub mod hashing;
pub mod kernel;
pub mod vectors;
