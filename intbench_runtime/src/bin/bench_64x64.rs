//! Variant B: 10,000 chained 64x64 kernel calls from seed 5281.

use std::io;

use intbench_runtime::clock::MonotonicClock;
use intbench_runtime::driver::Driver;
use intbench_runtime::error::RuntimeError;
use intbench_runtime::report::write_report;
use intbench_runtime::telemetry;
use intbench_runtime::variant::LARGE;

fn main() -> Result<(), RuntimeError> {
    telemetry::init();

    let outcome = Driver::new(MonotonicClock::new()).run(&LARGE);
    write_report(&mut io::stdout().lock(), &outcome)?;
    Ok(())
}
