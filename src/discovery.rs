//! Discovers eligible behavior names on a fixture type.
//!
//! The discovery process follows this flow:
//! 1. Enumerate the fixture's behavior registry
//! 2. Filter out reserved lifecycle names and private names
//! 3. Return the remainder in lexicographic order
//!
//! Discovery is pure with respect to the registry's contents at call time
//! and safe to call repeatedly.

use crate::fixture::{BehaviorFn, Fixture};

/// Lifecycle and framework names a registry entry may never shadow.
const RESERVED_NAMES: [&str; 3] = ["set_up", "run", "tear_down"];

/// Maps a fixture type to its ordered set of runnable behavior names.
#[derive(Debug)]
pub struct BehaviorDiscovery;

impl BehaviorDiscovery {
    /// Returns every eligible behavior name on `F`, sorted lexicographically.
    ///
    /// The sort guarantees deterministic execution order for bulk-added
    /// fixtures regardless of registry declaration order.
    pub fn discover<F: Fixture>() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = F::behaviors()
            .iter()
            .map(|behavior| behavior.name)
            .filter(|name| Self::is_eligible(name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Resolves a behavior name to its invoker, if the registry has it.
    ///
    /// Lookup is over the raw registry: reserved-name filtering applies to
    /// discovery, not to an explicitly bound name.
    pub fn resolve<F: Fixture>(name: &str) -> Option<BehaviorFn<F>> {
        F::behaviors()
            .iter()
            .find(|behavior| behavior.name == name)
            .map(|behavior| behavior.invoke)
    }

    fn is_eligible(name: &str) -> bool {
        !Self::is_reserved(name) && !Self::is_private(name)
    }

    fn is_reserved(name: &str) -> bool {
        RESERVED_NAMES.contains(&name)
    }

    /// Leading underscore marks a registry entry private by convention.
    fn is_private(name: &str) -> bool {
        name.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors;
    use crate::errors::TestError;
    use crate::fixture::Behavior;

    #[derive(Default)]
    struct Scrambled;

    impl Scrambled {
        fn test_zeta(&mut self) -> Result<(), TestError> {
            Ok(())
        }
        fn test_alpha(&mut self) -> Result<(), TestError> {
            Ok(())
        }
        fn _test_hidden(&mut self) -> Result<(), TestError> {
            Ok(())
        }
        fn run(&mut self) -> Result<(), TestError> {
            Ok(())
        }
    }

    impl Fixture for Scrambled {
        fn behaviors() -> Vec<Behavior<Self>> {
            behaviors![test_zeta, test_alpha, _test_hidden, run]
        }
    }

    #[test]
    fn discovery_sorts_and_filters() {
        assert_eq!(
            BehaviorDiscovery::discover::<Scrambled>(),
            vec!["test_alpha", "test_zeta"]
        );
    }

    #[test]
    fn discovery_is_repeatable() {
        assert_eq!(
            BehaviorDiscovery::discover::<Scrambled>(),
            BehaviorDiscovery::discover::<Scrambled>()
        );
    }

    #[test]
    fn resolve_hits_registry_entries() {
        assert!(BehaviorDiscovery::resolve::<Scrambled>("test_alpha").is_some());
        assert!(BehaviorDiscovery::resolve::<Scrambled>("test_missing").is_none());
    }
}
