//! Uniform composition of tests: the runnable contract and the composite
//! suite.

use crate::case::TestCase;
use crate::discovery::BehaviorDiscovery;
use crate::errors::TestError;
use crate::fixture::Fixture;
use crate::summary::RunSummary;

/// The shared run contract for a leaf test and a suite of tests.
///
/// Implementors record outcomes on the summary they are handed; only a
/// teardown fault may come back as `Err`.
pub trait Runnable {
    fn run(&mut self, summary: &mut RunSummary) -> Result<(), TestError>;
}

/// An ordered collection of runnables.
///
/// A suite is itself a [`Runnable`], so suites nest arbitrarily and a caller
/// never distinguishes leaf from composite. Children run in insertion order;
/// there is no de-duplication.
#[derive(Default)]
pub struct TestSuite {
    children: Vec<Box<dyn Runnable>>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already-bound test or a nested suite.
    pub fn add_test(&mut self, test: impl Runnable + 'static) {
        self.children.push(Box::new(test));
    }

    /// Bulk add: one test case per discovered behavior on `F`, each bound
    /// to a fresh fixture instance, appended in discovery order.
    pub fn add_fixture<F: Fixture + 'static>(&mut self) {
        for name in BehaviorDiscovery::discover::<F>() {
            self.add_test(TestCase::new(F::default(), name));
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Runnable for TestSuite {
    /// Forwards the same summary to every child in insertion order.
    ///
    /// The suite catches nothing itself: failure containment already
    /// happened at the leaves, and a propagating teardown fault aborts the
    /// remaining children. A suite with zero children runs to completion
    /// recording nothing.
    fn run(&mut self, summary: &mut RunSummary) -> Result<(), TestError> {
        for child in &mut self.children {
            child.run(summary)?;
        }
        Ok(())
    }
}
