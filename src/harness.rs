//! The benchmark harness: runs declared cases in order and collects results.

use crate::config::HarnessConfig;
use crate::report::{ConsoleReporter, Reporter, TableReporter};
use crate::result::{BenchCase, BenchResult};
use crate::{timer, workload};

/// Owns an ordered list of benchmark cases and runs them sequentially.
///
/// Cases run in declaration order on the calling thread; results come back in
/// the same order with matching labels. Two cases with the same size are
/// measured independently, never cached.
///
/// # Example
///
/// ```rust,no_run
/// use shiftbench::BenchHarness;
///
/// let mut harness = BenchHarness::new("unshift");
/// harness.case(60, 60);
/// harness.case(70, 70);
/// let results = harness.run();
/// assert_eq!(results.len(), 2);
/// ```
pub struct BenchHarness {
    suite: String,
    config: HarnessConfig,
    cases: Vec<BenchCase>,
    reporters: Vec<Box<dyn Reporter>>,
}

impl BenchHarness {
    /// Create a harness with default config.
    pub fn new(suite: &str) -> Self {
        Self::with_config(suite, HarnessConfig::default())
    }

    /// Create a harness with explicit config.
    pub fn with_config(suite: &str, config: HarnessConfig) -> Self {
        let mut reporters: Vec<Box<dyn Reporter>> = Vec::new();
        if !config.quiet {
            reporters.push(Box::new(ConsoleReporter));
        }
        reporters.push(Box::new(TableReporter));

        Self {
            suite: suite.to_string(),
            config,
            cases: Vec::new(),
            reporters,
        }
    }

    /// Declare a case with the config's default repetition count.
    pub fn case(&mut self, label: impl ToString, size: usize) -> &mut Self {
        let case = BenchCase::new(label, size).repetitions(self.config.repetitions);
        self.push(case)
    }

    /// Declare a fully specified case.
    pub fn push(&mut self, case: BenchCase) -> &mut Self {
        self.cases.push(case);
        self
    }

    /// Replace reporters with a custom set.
    pub fn reporters(&mut self, reporters: Vec<Box<dyn Reporter>>) -> &mut Self {
        self.reporters = reporters;
        self
    }

    /// Declared cases, in run order.
    pub fn cases(&self) -> &[BenchCase] {
        &self.cases
    }

    /// Run every declared case in order and return the results.
    ///
    /// Each case runs to completion before the next begins; the timer samples
    /// immediately around the workload call. An allocation failure inside the
    /// workload aborts the process without a partial report.
    pub fn run(self) -> Vec<BenchResult> {
        for r in &self.reporters {
            r.suite_start(&self.suite, self.cases.len());
        }

        let mut results = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            for r in &self.reporters {
                r.case_start(&case.label);
            }

            let (sample, ()) = timer::measure(|| workload::run(case.size, case.repetitions));
            let result = BenchResult::from_sample(case.label.clone(), sample);

            for r in &self.reporters {
                r.case_end(&result);
            }
            results.push(result);
        }

        for r in &self.reporters {
            r.suite_end(&results);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn silent(suite: &str, repetitions: u64) -> BenchHarness {
        let mut harness =
            BenchHarness::with_config(suite, HarnessConfig::new().repetitions(repetitions));
        harness.reporters(vec![]);
        harness
    }

    #[test]
    fn should_return_results_in_declaration_order() {
        let mut harness = silent("order", 10);
        harness.case(60, 60);
        harness.case(70, 70);
        harness.case(60, 60);

        let results = harness.run();
        assert_eq!(results.len(), 3);
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["60", "70", "60"]);
    }

    #[test]
    fn should_produce_one_result_per_case() {
        let mut harness = silent("count", 5);
        for size in 0..8 {
            harness.case(size, size);
        }
        let case_count = harness.cases().len();
        let results = harness.run();
        assert_eq!(results.len(), case_count);
    }

    #[test]
    fn should_report_non_negative_durations() {
        let mut harness = silent("nonneg", 100);
        harness.case("a", 0);
        harness.case("b", 16);

        for result in harness.run() {
            assert!(result.real_time >= Duration::ZERO);
            if let Some(user) = result.user_time {
                assert!(user >= Duration::ZERO);
            }
            if let Some(system) = result.system_time {
                assert!(system >= Duration::ZERO);
            }
        }
    }

    #[test]
    fn should_run_zero_size_case_without_failure() {
        let mut harness = silent("zero", 100);
        harness.case(0, 0);
        let results = harness.run();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "0");
    }

    #[test]
    fn should_honor_per_case_repetition_override() {
        let mut harness = silent("override", 1_000_000);
        harness.push(BenchCase::new("tiny", 4).repetitions(10));
        assert_eq!(harness.cases()[0].repetitions, 10);
        // Completes quickly because the override, not the default, applies.
        let results = harness.run();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn should_show_higher_cost_for_much_larger_sizes() {
        // Timing is noisy, so this asserts only an order-of-magnitude trend:
        // the sizes differ enough that per-cycle shift cost dominates any
        // scheduler jitter. Best-of-three damps outliers further.
        let min_real = |size: usize| {
            (0..3)
                .map(|_| {
                    let mut harness = silent("trend", 2_000);
                    harness.case(size, size);
                    harness.run()[0].real_time
                })
                .min()
                .unwrap()
        };

        let small = min_real(0);
        let large = min_real(50_000);
        assert!(large > small, "expected {large:?} > {small:?}");
    }

    #[test]
    fn should_render_scenario_table_with_two_labeled_rows() {
        let mut harness = silent("scenario", 1000);
        harness.case(60, 60);
        harness.case(70, 70);

        let table = crate::report::render_table(&harness.run());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("60"));
        assert!(lines[2].starts_with("70"));
        for line in &lines[1..] {
            assert_eq!(line.split_whitespace().count(), 5);
        }
    }
}
