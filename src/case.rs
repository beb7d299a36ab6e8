//! The leaf runnable: one fixture instance bound to one behavior name.

use std::any::type_name;

use crate::discovery::BehaviorDiscovery;
use crate::errors::TestError;
use crate::fixture::Fixture;
use crate::suite::Runnable;
use crate::summary::RunSummary;

/// A single bound test: a fixture instance plus the name of the behavior to
/// invoke on it.
///
/// The name is unchecked at construction; an absent behavior surfaces as a
/// recorded failure when the case runs, carrying the `BehaviorNotFound`
/// kind. Each execution independently re-runs the full lifecycle, so a case
/// may run any number of times.
pub struct TestCase<F: Fixture> {
    fixture: F,
    behavior: String,
}

impl<F: Fixture> TestCase<F> {
    pub fn new(fixture: F, behavior: impl Into<String>) -> Self {
        Self {
            fixture,
            behavior: behavior.into(),
        }
    }

    pub fn behavior(&self) -> &str {
        &self.behavior
    }

    /// Read access to the fixture, for inspecting state a behavior left
    /// behind (an internal log, say). Outcomes themselves go through the
    /// summary, never through the fixture.
    pub fn fixture(&self) -> &F {
        &self.fixture
    }

    fn invoke(&mut self) -> Result<(), TestError> {
        let invoke = BehaviorDiscovery::resolve::<F>(&self.behavior).ok_or_else(|| {
            TestError::behavior_not_found(&self.behavior, type_name::<F>())
        })?;
        invoke(&mut self.fixture)
    }
}

impl<F: Fixture> Runnable for TestCase<F> {
    /// Executes the four-phase lifecycle: start, setup, invoke, teardown.
    ///
    /// The start is always recorded first. A setup or invoke error is
    /// contained here and recorded as exactly one failure. Teardown runs
    /// unconditionally afterwards; a teardown fault is the one error this
    /// method propagates.
    fn run(&mut self, summary: &mut RunSummary) -> Result<(), TestError> {
        summary.record_started();

        let outcome = self.fixture.set_up().and_then(|_| self.invoke());
        if outcome.is_err() {
            summary.record_failed();
        }

        self.fixture
            .tear_down()
            .map_err(|e| TestError::teardown(&self.behavior, e.to_string()))?;
        Ok(())
    }
}
