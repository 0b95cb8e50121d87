use clap::Parser;
use compute_expr_bench::benches;
use compute_expr_bench::{OutputMode, VERBOSE_ENV};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Diagnostics stay quiet unless `RUST_LOG` asks for more.
const DEFAULT_LOG_FILTER: &str = "compute_expr_bench=warn";

#[derive(Parser, Debug)]
#[command(name = "compute-expr-bench")]
#[command(version)]
#[command(about = "Times the generated expression catalog and prints a summary table")]
struct Args {
    /// Print a banner, per-benchmark progress, and comparison notes.
    ///
    /// May be repeated. Also enabled by setting BENCH_VERBOSE=1.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Extra tokens are accepted and ignored, apart from `-v` / `--verbose`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

impl Args {
    fn verbose_requested(&self) -> bool {
        self.verbose > 0 || self.rest.iter().any(|t| t == "-v" || t == "--verbose")
    }
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout carries only the report.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let env_value = std::env::var(VERBOSE_ENV).ok();
    let mode = OutputMode::resolve(args.verbose_requested(), env_value.as_deref());

    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    benches::run_suite(&mut out, mode)?;
    out.flush()
}
