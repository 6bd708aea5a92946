//! intbench kernel v1: Known-answer Harness
//!
//! Loads kernel vectors, runs each one twice through the kernel,
//! and compares against the recorded result.

use std::path::Path;
use std::process::ExitCode;

use intbench_kernel::vectors::{load_vectors, VectorError};

static FIXTURE_PATHS: [&str; 3] = [
    "kernel_vectors.json",
    "tests/golden/kernel_vectors.json",
    "intbench_kernel/tests/golden/kernel_vectors.json",
];

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, VectorError> {
    let Some(path) = FIXTURE_PATHS.iter().map(Path::new).find(|p| p.exists()) else {
        eprintln!("Could not find kernel_vectors.json in any of {:?}", FIXTURE_PATHS);
        return Ok(false);
    };
    let vectors = load_vectors(path)?;
    println!("Loaded vectors from: {}", path.display());

    let mut passed = 0;
    for v in &vectors {
        let check = v.check()?;
        if check.passed() {
            passed += 1;
            println!("[PASS] n={}, seed={}: {}", v.dimension, v.seed, check.first);
        } else {
            println!("[FAIL] n={}, seed={}:", v.dimension, v.seed);
            if !check.matches() {
                println!("  Result mismatch: got={} expected={}", check.first, v.expected);
            }
            if !check.deterministic() {
                println!("  Determinism fail: run1={} run2={}", check.first, check.second);
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, vectors.len());
    let all_passed = passed == vectors.len();
    if all_passed {
        println!("[OK] All kernel vectors PASSED.");
    } else {
        println!("[FAIL] Some vectors failed.");
    }
    Ok(all_passed)
}
