//! Console report formats.
//!
//! Compact (4x4):
//!   Result: <u64>
//!   Time: <duration, e.g. 72.045412ms>
//!   Ops/sec: <0 decimals>
//!
//! Matrix (64x64), framed by blank lines:
//!   Matrix size: NxN
//!   Result: <u64>
//!   Time: <seconds, 6 significant digits>s
//!   Ops/sec: <2 decimals>
//!   Matrix ops/sec: <0 decimals>

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::driver::BenchOutcome;
use crate::variant::ReportStyle;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Duration rendered with the largest fitting unit: `0s`, `850ns`,
/// `1.5µs`, `72.045412ms`, `2.5s`, `1m2.5s`, `1h0m0s`.
pub struct UnitDuration(pub Duration);

impl fmt::Display for UnitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos == 0 {
            return f.write_str("0s");
        }
        if nanos < NANOS_PER_MICRO {
            return write!(f, "{}ns", nanos);
        }
        if nanos < NANOS_PER_MILLI {
            return write_fraction(f, nanos, NANOS_PER_MICRO, 3, "µs");
        }
        if nanos < NANOS_PER_SEC {
            return write_fraction(f, nanos, NANOS_PER_MILLI, 6, "ms");
        }

        let total_secs = nanos / NANOS_PER_SEC;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if total_secs >= 60 {
            write!(f, "{}m", minutes)?;
        }
        let secs_nanos = (total_secs % 60) * NANOS_PER_SEC + nanos % NANOS_PER_SEC;
        write_fraction(f, secs_nanos, NANOS_PER_SEC, 9, "s")
    }
}

/// `whole[.frac]unit` with trailing fractional zeros trimmed.
fn write_fraction(
    f: &mut fmt::Formatter<'_>,
    nanos: u128,
    per_unit: u128,
    digits: usize,
    unit: &str,
) -> fmt::Result {
    let whole = nanos / per_unit;
    let frac = nanos % per_unit;
    if frac == 0 {
        return write!(f, "{}{}", whole, unit);
    }
    let frac = format!("{:0width$}", frac, width = digits);
    write!(f, "{}.{}{}", whole, frac.trim_end_matches('0'), unit)
}

/// Float with 6 significant digits, switching to exponent form outside
/// `1e-4 <= |x| < 1e6`, trailing zeros trimmed: `1.95755`, `0.0720454`,
/// `1.23e-05`, `1.5e+06`.
pub struct SignificantSeconds(pub f64);

const SIGNIFICANT_DIGITS: i32 = 6;

impl fmt::Display for SignificantSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x == 0.0 || !x.is_finite() {
            return write!(f, "{}", x);
        }

        // Exponent after rounding to the significant digits.
        let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, x);
        let (mantissa, exp) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().map_err(|_| fmt::Error)?),
            None => return Err(fmt::Error),
        };

        if exp < -4 || exp >= SIGNIFICANT_DIGITS {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
            let fixed = format!("{:.*}", decimals, x);
            f.write_str(trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The console report for one outcome, in its variant's style.
pub struct Report<'a> {
    outcome: &'a BenchOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a BenchOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.outcome;
        match o.variant.style {
            ReportStyle::Compact => {
                writeln!(f, "Result: {}", o.result)?;
                writeln!(f, "Time: {}", UnitDuration(o.elapsed))?;
                writeln!(f, "Ops/sec: {:.0}", o.ops_per_sec())
            }
            ReportStyle::Matrix => {
                let n = o.variant.dimension;
                writeln!(f)?;
                writeln!(f, "Matrix size: {}x{}", n, n)?;
                writeln!(f, "Result: {}", o.result)?;
                writeln!(f, "Time: {}s", SignificantSeconds(o.elapsed.as_secs_f64()))?;
                writeln!(f, "Ops/sec: {:.2}", o.ops_per_sec())?;
                writeln!(f, "Matrix ops/sec: {:.0}", o.matrix_ops_per_sec())?;
                writeln!(f)
            }
        }
    }
}

/// Write the report and flush.
pub fn write_report<W: Write>(out: &mut W, outcome: &BenchOutcome) -> io::Result<()> {
    write!(out, "{}", Report::new(outcome))?;
    out.flush()
}
