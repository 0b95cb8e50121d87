//! Plain-text rendering of a run: banner, summary table, and trailing notes.
//!
//! Everything here writes to a caller-supplied [`Write`] so the binary can
//! hand in a locked stdout and tests can hand in a `Vec<u8>`.

use crate::schema::BenchmarkRecord;
use crate::OutputMode;
use std::io::{self, Write};

pub const TITLE: &str = "Compiled Expression Performance Benchmarks";

const RULE_WIDTH: usize = 80;

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Printed before any benchmark runs.
pub fn write_header<W: Write>(out: &mut W, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Verbose => {
            writeln!(out, "{}", rule('='))?;
            writeln!(out, "{TITLE}")?;
            writeln!(out, "{}", rule('='))?;
            writeln!(out)?;
        }
        OutputMode::Summary => {
            writeln!(out, "{TITLE} (summary)")?;
        }
    }
    Ok(())
}

/// Per-benchmark line printed just before the timed loop starts (verbose only).
pub fn write_running<W: Write>(out: &mut W, name: &str, iterations: u64) -> io::Result<()> {
    writeln!(
        out,
        "Running: {name} ({} iterations)",
        group_thousands(iterations)
    )
}

/// Per-benchmark detail printed once the record exists (verbose only).
pub fn write_detail<W: Write>(out: &mut W, record: &BenchmarkRecord) -> io::Result<()> {
    writeln!(out, "  Time: {:.2} ms", record.total_time_ms)?;
    writeln!(out, "  Result: {}", record.result_text())?;
    writeln!(out)
}

pub fn write_summary<W: Write>(out: &mut W, records: &[BenchmarkRecord]) -> io::Result<()> {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "Summary")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<30} {:<12} {:<12} {:<12}",
        "Benchmark", "Iterations", "Total (ms)", "Per Op (μs)"
    )?;
    writeln!(out, "{}", rule('-'))?;

    for r in records {
        writeln!(
            out,
            "{:<30} {:<12} {:<12.2} {:<12.6}",
            r.name,
            group_thousands(r.iterations),
            r.total_time_ms,
            r.time_per_op_us
        )?;
    }

    writeln!(out)
}

/// Printed after the table.
pub fn write_footer<W: Write>(out: &mut W, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Verbose => {
            writeln!(out, "{}", rule('='))?;
            writeln!(out, "Comparison with JavaScript (from compile-performance.test.ts)")?;
            writeln!(out, "{}", rule('='))?;
            writeln!(out)?;
            writeln!(out, "To compare with JavaScript performance:")?;
            writeln!(out, "  npm run test compute-engine/compile-performance")?;
            writeln!(out)?;
            writeln!(out, "Expected results:")?;
            writeln!(
                out,
                "  - Compiled Rust should be faster than JavaScript for tight scalar loops"
            )?;
            writeln!(
                out,
                "  - JavaScript may be competitive for single evaluations once JIT-warmed"
            )?;
            writeln!(
                out,
                "  - Both should be much faster than interpreted evaluation"
            )?;
            writeln!(out)?;
        }
        OutputMode::Summary => {
            writeln!(
                out,
                "Tip: run with --verbose (or set {}=1) for per-benchmark output.",
                crate::VERBOSE_ENV
            )?;
        }
    }
    Ok(())
}
