pub mod benches;
pub mod formulas;
pub mod harness;
pub mod report;
pub mod schema;

/// Environment variable that turns on verbose output when set to exactly `1`.
pub const VERBOSE_ENV: &str = "BENCH_VERBOSE";

/// How much the runner prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One-line header, summary table, and a hint about `--verbose`.
    #[default]
    Summary,
    /// Banner, per-benchmark progress, summary table, and comparison notes.
    Verbose,
}

impl OutputMode {
    /// `--verbose`/`-v` on the command line, or `BENCH_VERBOSE` equal to `"1"`.
    pub fn resolve(flag: bool, env_value: Option<&str>) -> Self {
        if flag || env_value == Some("1") {
            OutputMode::Verbose
        } else {
            OutputMode::Summary
        }
    }

    pub fn is_verbose(self) -> bool {
        self == OutputMode::Verbose
    }
}
