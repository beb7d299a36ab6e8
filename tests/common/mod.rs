//! Toy fixtures exercising the framework. Test authors' collaborators,
//! shared across the integration test files.

use pariksha::{behaviors, Behavior, Fixture, TestError};

/// The canonical logging fixture: records every lifecycle step it sees into
/// an internal log string.
#[derive(Default)]
pub struct WasRun {
    pub log: String,
}

impl WasRun {
    pub fn test_method(&mut self) -> Result<(), TestError> {
        self.log.push_str("testMethod ");
        Ok(())
    }

    pub fn test_broken_method(&mut self) -> Result<(), TestError> {
        Err(TestError::fault("deliberately broken"))
    }
}

impl Fixture for WasRun {
    fn behaviors() -> Vec<Behavior<Self>> {
        behaviors![test_method, test_broken_method]
    }

    fn set_up(&mut self) -> Result<(), TestError> {
        self.log.push_str("setUp ");
        Ok(())
    }

    fn tear_down(&mut self) -> Result<(), TestError> {
        self.log.push_str("tearDown ");
        Ok(())
    }
}

/// Fixture whose setup fails; its behavior must never run.
#[derive(Default)]
pub struct SetupFails {
    pub log: String,
}

impl SetupFails {
    pub fn test_method(&mut self) -> Result<(), TestError> {
        self.log.push_str("testMethod ");
        Ok(())
    }
}

impl Fixture for SetupFails {
    fn behaviors() -> Vec<Behavior<Self>> {
        behaviors![test_method]
    }

    fn set_up(&mut self) -> Result<(), TestError> {
        self.log.push_str("setUp ");
        Err(TestError::fault("setup exploded"))
    }

    fn tear_down(&mut self) -> Result<(), TestError> {
        self.log.push_str("tearDown ");
        Ok(())
    }
}

/// Fixture whose teardown faults; the one error a run propagates.
#[derive(Default)]
pub struct BrokenTearDown {
    pub broken_behavior: bool,
}

impl BrokenTearDown {
    pub fn test_method(&mut self) -> Result<(), TestError> {
        if self.broken_behavior {
            Err(TestError::fault("behavior failed first"))
        } else {
            Ok(())
        }
    }
}

impl Fixture for BrokenTearDown {
    fn behaviors() -> Vec<Behavior<Self>> {
        behaviors![test_method]
    }

    fn tear_down(&mut self) -> Result<(), TestError> {
        Err(TestError::fault("teardown exploded"))
    }
}
