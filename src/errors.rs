//! Error taxonomy for test execution.
//!
//! Every failure a behavior can signal travels through one enum, and test
//! code classifies outcomes with the type-safe [`FailureKind`] instead of
//! matching on message strings.

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all failure modes a test execution can produce.
///
/// Assertion failures, unexpected faults, and unresolved behavior names are
/// all contained at the test-case boundary and converted into one recorded
/// failure. `Teardown` is the exception: it is the only variant that escapes
/// a test case's `run`.
#[derive(Debug, Error)]
pub enum TestError {
    #[error("Assertion failed: {message}")]
    Assertion { message: String },

    #[error("Fault: {message}")]
    Fault { message: String },

    #[error("No behavior named '{behavior}' on fixture '{fixture}'")]
    BehaviorNotFound { behavior: String, fixture: String },

    #[error("Teardown fault in '{behavior}': {message}")]
    Teardown { behavior: String, message: String },
}

/// Type-safe failure classification that corresponds to TestError variants.
/// This replaces fragile string-based matching in test code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An explicitly signaled expectation mismatch inside a behavior.
    Assertion,
    /// Any other error raised during setup or a behavior.
    Fault,
    /// The bound behavior name did not resolve against the fixture's registry.
    BehaviorNotFound,
    /// A fault raised by `tear_down`; never swallowed, always propagated.
    Teardown,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Assertion => "Assertion",
            FailureKind::Fault => "Fault",
            FailureKind::BehaviorNotFound => "BehaviorNotFound",
            FailureKind::Teardown => "Teardown",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TestError {
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault {
            message: message.into(),
        }
    }

    pub fn behavior_not_found(behavior: impl Into<String>, fixture: impl Into<String>) -> Self {
        Self::BehaviorNotFound {
            behavior: behavior.into(),
            fixture: fixture.into(),
        }
    }

    pub fn teardown(behavior: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Teardown {
            behavior: behavior.into(),
            message: message.into(),
        }
    }

    /// Returns the type-safe classification for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            TestError::Assertion { .. } => FailureKind::Assertion,
            TestError::Fault { .. } => FailureKind::Fault,
            TestError::BehaviorNotFound { .. } => FailureKind::BehaviorNotFound,
            TestError::Teardown { .. } => FailureKind::Teardown,
        }
    }
}

impl Diagnostic for TestError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            TestError::Assertion { .. } => "pariksha::assertion",
            TestError::Fault { .. } => "pariksha::fault",
            TestError::BehaviorNotFound { .. } => "pariksha::behavior_not_found",
            TestError::Teardown { .. } => "pariksha::teardown",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self {
            TestError::BehaviorNotFound { .. } => Some(Box::new(
                "behavior names are resolved against the fixture's behaviors() registry",
            )),
            TestError::Teardown { .. } => Some(Box::new(
                "teardown faults are never swallowed; they propagate to the suite's caller",
            )),
            _ => None,
        }
    }
}

/// Succeeds when `condition` holds, otherwise signals an assertion failure.
pub fn check(condition: bool, message: impl Into<String>) -> Result<(), TestError> {
    if condition {
        Ok(())
    } else {
        Err(TestError::assertion(message))
    }
}

/// Asserts equality, reporting both sides on mismatch.
pub fn check_eq<T: PartialEq + std::fmt::Debug>(actual: &T, expected: &T) -> Result<(), TestError> {
    if actual == expected {
        Ok(())
    } else {
        Err(TestError::assertion(format!(
            "expected {:?}, got {:?}",
            expected, actual
        )))
    }
}

/// Prints a TestError with full miette diagnostics.
///
/// Use this for user-facing error display when a teardown fault escapes a
/// run; counted failures are reported through the summary instead.
pub fn print_error(error: TestError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
