//! intbench kernel v1: Known-answer Vectors
//!
//! A vector is `(dimension, seed, expected)`. Fixture files are JSON
//! arrays of vectors; u64 values are stored as plain JSON integers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kernel::kernel_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelVector {
    pub dimension: usize,
    pub seed: u64,
    pub expected: u64,
}

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vectors: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no kernel for dimension {0}")]
    UnsupportedDimension(usize),
}

/// Outcome of running one vector twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorCheck {
    pub vector: KernelVector,
    pub first: u64,
    pub second: u64,
}

impl VectorCheck {
    pub fn matches(&self) -> bool {
        self.first == self.vector.expected
    }

    pub fn deterministic(&self) -> bool {
        self.first == self.second
    }

    pub fn passed(&self) -> bool {
        self.matches() && self.deterministic()
    }
}

impl KernelVector {
    /// Run the kernel for this vector twice and record both results.
    pub fn check(&self) -> Result<VectorCheck, VectorError> {
        let kernel =
            kernel_for(self.dimension).ok_or(VectorError::UnsupportedDimension(self.dimension))?;
        Ok(VectorCheck {
            vector: *self,
            first: kernel(self.seed),
            second: kernel(self.seed),
        })
    }
}

pub fn parse_vectors(json: &str) -> Result<Vec<KernelVector>, VectorError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_vectors(path: &Path) -> Result<Vec<KernelVector>, VectorError> {
    let data = fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vectors(&data)
}
