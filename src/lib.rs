//! Pariksha: a minimal xUnit-style testing framework.
//!
//! A test is a fixture instance bound to one named behavior. Tests compose
//! into suites, suites nest into suites, and everything runnable shares one
//! contract: run against a [`RunSummary`] and record the outcome there.
//!
//! The pieces, leaf-first:
//! - [`RunSummary`] accumulates run/failed counts and renders the fixed
//!   summary string.
//! - [`Fixture`] is the contract a test author implements: a behavior
//!   registry plus optional `set_up`/`tear_down` hooks.
//! - [`TestCase`] executes one behavior with setup/teardown bracketing and
//!   contains its failure.
//! - [`TestSuite`] is the composite: an ordered collection of runnables,
//!   populated one test at a time or in bulk via discovery.
//! - [`BehaviorDiscovery`] maps a fixture type to its eligible behavior
//!   names, deterministically.
//!
//! ```
//! use pariksha::{behaviors, Behavior, Fixture, RunSummary, Runnable, TestCase, TestError};
//!
//! #[derive(Default)]
//! struct Arithmetic;
//!
//! impl Arithmetic {
//!     fn test_addition(&mut self) -> Result<(), TestError> {
//!         pariksha::check_eq(&(2 + 2), &4)
//!     }
//! }
//!
//! impl Fixture for Arithmetic {
//!     fn behaviors() -> Vec<Behavior<Self>> {
//!         behaviors![test_addition]
//!     }
//! }
//!
//! let mut summary = RunSummary::new();
//! TestCase::new(Arithmetic::default(), "test_addition")
//!     .run(&mut summary)
//!     .unwrap();
//! assert_eq!(summary.summary(), "1 run, 0 failed");
//! ```

pub use crate::case::TestCase;
pub use crate::discovery::BehaviorDiscovery;
pub use crate::errors::{check, check_eq, print_error, FailureKind, TestError};
pub use crate::fixture::{Behavior, BehaviorFn, Fixture};
pub use crate::runner::{run_fixture, run_suite};
pub use crate::suite::{Runnable, TestSuite};
pub use crate::summary::RunSummary;

pub mod case;
pub mod discovery;
pub mod errors;
pub mod fixture;
pub mod report;
pub mod runner;
pub mod suite;
pub mod summary;
