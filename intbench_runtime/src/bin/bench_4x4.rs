//! Variant A: 1,000,000 chained 4x4 kernel calls from seed 5281.

use std::io;

use intbench_runtime::clock::MonotonicClock;
use intbench_runtime::driver::Driver;
use intbench_runtime::error::RuntimeError;
use intbench_runtime::report::write_report;
use intbench_runtime::telemetry;
use intbench_runtime::variant::SMALL;

fn main() -> Result<(), RuntimeError> {
    telemetry::init();

    let outcome = Driver::new(MonotonicClock::new()).run(&SMALL);
    write_report(&mut io::stdout().lock(), &outcome)?;
    Ok(())
}
