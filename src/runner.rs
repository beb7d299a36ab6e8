//! Explicit entry points for running a suite tree.
//!
//! No process-global state: each call constructs its own summary, runs, and
//! hands the summary back to the caller.

use crate::errors::TestError;
use crate::fixture::Fixture;
use crate::suite::{Runnable, TestSuite};
use crate::summary::RunSummary;

/// Runs a suite against a fresh summary and returns it.
///
/// A teardown fault escapes as `Err`; every outcome up to that point is
/// already counted, but the summary is dropped with the run. Callers who
/// need the partial counts can thread their own [`RunSummary`] through
/// [`Runnable::run`] instead.
pub fn run_suite(suite: &mut TestSuite) -> Result<RunSummary, TestError> {
    let mut summary = RunSummary::new();
    suite.run(&mut summary)?;
    Ok(summary)
}

/// Convenience: builds a single-fixture suite via discovery and runs it.
pub fn run_fixture<F: Fixture + 'static>() -> Result<RunSummary, TestError> {
    let mut suite = TestSuite::new();
    suite.add_fixture::<F>();
    run_suite(&mut suite)
}
