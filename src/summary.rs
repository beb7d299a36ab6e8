//! Run/failed accounting for a whole suite tree.

/// Mutable counter pair shared by every test in a run.
///
/// The caller threads one `RunSummary` through a suite tree; each leaf test
/// records a start unconditionally and a failure at most once. Counters are
/// never reset; a fresh count requires a fresh value.
#[derive(Debug, Default)]
pub struct RunSummary {
    run: usize,
    failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of one test execution.
    pub fn record_started(&mut self) {
        self.run += 1;
    }

    /// Marks one test execution as failed.
    ///
    /// Passive counter: pairing with a preceding `record_started` is the
    /// test case's obligation, not enforced here.
    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Renders the fixed summary string, e.g. `"2 run, 1 failed"`.
    ///
    /// The exact format is a compatibility contract; callers parse it in
    /// tests and scripts.
    pub fn summary(&self) -> String {
        format!("{} run, {} failed", self.run, self.failed)
    }

    pub fn run_count(&self) -> usize {
        self.run
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_matches_recorded_counts() {
        let mut summary = RunSummary::new();
        for _ in 0..5 {
            summary.record_started();
        }
        for _ in 0..3 {
            summary.record_failed();
        }
        assert_eq!(summary.summary(), "5 run, 3 failed");
        assert_eq!(summary.run_count(), 5);
        assert_eq!(summary.failed_count(), 3);
    }

    #[test]
    fn fresh_summary_is_clean() {
        let summary = RunSummary::new();
        assert_eq!(summary.summary(), "0 run, 0 failed");
        assert!(!summary.has_failures());
    }
}
