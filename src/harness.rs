use std::hint::black_box;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct Measured {
    pub iters: u64,
    pub total_ms: f64,
}

/// Calls `f` exactly `iters` times back to back and reports the wall-clock
/// time of the whole loop. There is no warm-up pass; results are discarded.
pub fn measure_fn<T>(iters: u64, mut f: impl FnMut() -> T) -> Measured {
    let start = Instant::now();
    for _ in 0..iters {
        black_box(f());
    }
    let elapsed = start.elapsed();

    Measured {
        iters,
        total_ms: elapsed.as_secs_f64() * 1000.0,
    }
}
