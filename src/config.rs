//! Configuration for the benchmark harness.

use crate::workload::DEFAULT_REPETITIONS;

/// Harness configuration.
///
/// Built programmatically; the harness takes no environment variables.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Default repetition count for cases declared without an override.
    pub repetitions: u64,
    /// Suppress per-case progress lines on stderr. The stdout table is
    /// always emitted.
    pub quiet: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            quiet: false,
        }
    }
}

impl HarnessConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default repetition count.
    pub fn repetitions(mut self, repetitions: u64) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Suppress stderr progress output.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
