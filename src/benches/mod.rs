
use crate::report;
use crate::schema::BenchmarkRecord;
use crate::OutputMode;
use std::io::{self, Write};
use tracing::info;

/// Header, every catalog benchmark, summary table, footer.
///
/// Nothing after the header is written if a benchmark fails.
pub fn run_suite<W: Write>(out: &mut W, mode: OutputMode) -> io::Result<Vec<BenchmarkRecord>> {
    report::write_header(out, mode)?;

    info!(benchmarks = catalog::NAMES.len(), ?mode, "starting run");
    let records = catalog::run(out, mode)?;

    report::write_summary(out, &records)?;
    report::write_footer(out, mode)?;
    info!("run complete");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(mode: OutputMode) -> (Vec<BenchmarkRecord>, String) {
        let mut out = Vec::new();
        let records = run_suite(&mut out, mode).unwrap();
        (records, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_summary_mode_output() {
        let (records, text) = run_to_string(OutputMode::Summary);
        assert_eq!(records.len(), catalog::NAMES.len());

        assert!(text.starts_with(&format!("{} (summary)\n", report::TITLE)));
        assert!(!text.contains("Running: "));
        assert!(!text.contains("npm run test"));
        assert!(text.contains("\nSummary\n"));
        for name in catalog::NAMES {
            assert_eq!(text.matches(&format!("\n{name} ")).count(), 1, "{name}");
        }
        assert!(text.ends_with("for per-benchmark output.\n"));
    }

    #[test]
    fn test_verbose_mode_output() {
        let (records, text) = run_to_string(OutputMode::Verbose);
        assert_eq!(records.len(), catalog::NAMES.len());

        assert!(text.starts_with(&format!("{}\n{}\n", "=".repeat(80), report::TITLE)));
        assert!(!text.contains("(summary)"));
        assert_eq!(text.matches("Running: ").count(), catalog::NAMES.len());
        assert!(text.contains("\nSummary\n"));
        assert!(text.contains("npm run test compute-engine/compile-performance"));
        assert!(!text.contains("Tip:"));
    }

    #[test]
    fn test_table_rows_in_catalog_order() {
        let (_, text) = run_to_string(OutputMode::Summary);
        let table = text.split(&"-".repeat(80)).nth(1).unwrap();
        let row_names: Vec<&str> = table
            .lines()
            .filter(|l| !l.is_empty())
            .take_while(|l| !l.starts_with("Tip:"))
            .map(|l| l[..30].trim_end())
            .collect();
        assert_eq!(row_names, catalog::NAMES);
    }
}
