//! User-facing summary output for a surrounding runner.
//!
//! The core's contract is the summary string itself; everything here is
//! presentation on top of it. Nothing in the core depends on this module.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::summary::RunSummary;

/// Configuration for summary reporting.
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportConfig {
    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

/// Prints the fixed summary line, green when clean, red when any test
/// failed.
pub fn print_summary(summary: &RunSummary, config: &ReportConfig) -> io::Result<()> {
    let mut out = StandardStream::stdout(config.color_choice());
    let color = if summary.has_failures() {
        Color::Red
    } else {
        Color::Green
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(out, "{}", summary.summary())?;
    out.reset()
}

/// Process exit code convention for runners: nonzero when any test failed.
pub fn exit_code(summary: &RunSummary) -> i32 {
    if summary.has_failures() {
        1
    } else {
        0
    }
}
