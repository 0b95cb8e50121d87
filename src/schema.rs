use crate::harness::Measured;

/// How a reference result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultKind {
    /// Integer inputs through `+`, `*` and integer powers only; printed without a fraction.
    Integer,
    #[default]
    Float,
}

/// One summary row: how long a catalog entry took and what it evaluated to.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub name: String,
    pub iterations: u64,
    pub total_time_ms: f64,
    pub time_per_op_us: f64,
    pub result: f64,
    pub kind: ResultKind,
}

impl BenchmarkRecord {
    pub fn new(name: impl Into<String>, iterations: u64, total_time_ms: f64, result: f64) -> Self {
        Self {
            name: name.into(),
            iterations,
            total_time_ms,
            time_per_op_us: (total_time_ms * 1000.0) / iterations as f64,
            result,
            kind: ResultKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: ResultKind) -> Self {
        self.kind = kind;
        self
    }

    /// `50` for integer results, `50.0` / `39.6` for float results.
    pub fn result_text(&self) -> String {
        match self.kind {
            ResultKind::Integer => format!("{:.0}", self.result),
            ResultKind::Float => format!("{:?}", self.result),
        }
    }

    pub fn from_measured(name: impl Into<String>, m: &Measured, result: f64) -> Self {
        Self::new(name, m.iters, m.total_ms, result)
    }
}
