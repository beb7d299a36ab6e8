//! The contract a test author implements.
//!
//! A fixture is a value under test exposing named behaviors and optional
//! `set_up`/`tear_down` hooks. Behaviors are registered explicitly as
//! (name, invoker) pairs rather than found by reflection, which keeps
//! discovery deterministic and resolvable at compile time.

use crate::errors::TestError;

/// A zero-argument behavior bound to a fixture type.
///
/// Behaviors take `&mut self` so a test can mutate its own fixture (an
/// internal log, a counter); that state is visible only by inspecting the
/// fixture afterwards, never through the run summary.
pub type BehaviorFn<F> = fn(&mut F) -> Result<(), TestError>;

/// One entry in a fixture's behavior registry.
#[derive(Debug, Clone, Copy)]
pub struct Behavior<F> {
    pub name: &'static str,
    pub invoke: BehaviorFn<F>,
}

/// A test fixture: a behavior registry plus lifecycle hooks.
///
/// `Default` supplies the fresh instance bulk discovery binds to each
/// discovered behavior; one instance per test case, never shared, so state
/// set in `set_up` cannot leak between tests.
pub trait Fixture: Default {
    /// The fixture's behavior registry, in the author's declared order.
    ///
    /// Discovery imposes its own (lexicographic) order on top of this; see
    /// [`crate::discovery::BehaviorDiscovery`].
    fn behaviors() -> Vec<Behavior<Self>>
    where
        Self: Sized;

    /// Runs before the behavior. A failure here counts as a test failure
    /// and skips the behavior, but teardown still runs.
    fn set_up(&mut self) -> Result<(), TestError> {
        Ok(())
    }

    /// Runs after the behavior, unconditionally, even when setup or the
    /// behavior failed.
    fn tear_down(&mut self) -> Result<(), TestError> {
        Ok(())
    }
}

/// Builds a behavior registry from inherent method names.
///
/// Each listed method must have the signature
/// `fn(&mut self) -> Result<(), TestError>`; its registered name is the
/// stringified method name.
///
/// ```
/// use pariksha::{behaviors, Behavior, Fixture, TestError};
///
/// #[derive(Default)]
/// struct Counter {
///     value: u32,
/// }
///
/// impl Counter {
///     fn test_increment(&mut self) -> Result<(), TestError> {
///         self.value += 1;
///         pariksha::check_eq(&self.value, &1)
///     }
/// }
///
/// impl Fixture for Counter {
///     fn behaviors() -> Vec<Behavior<Self>> {
///         behaviors![test_increment]
///     }
/// }
/// ```
#[macro_export]
macro_rules! behaviors {
    ($($method:ident),* $(,)?) => {
        vec![
            $(
                $crate::fixture::Behavior {
                    name: stringify!($method),
                    invoke: Self::$method as $crate::fixture::BehaviorFn<Self>,
                }
            ),*
        ]
    };
}
