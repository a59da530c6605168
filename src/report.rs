//! Result rendering and pluggable progress reporters.

use crate::result::BenchResult;
use std::io::Write;
use std::time::Duration;

/// Decimal places used for every duration column.
const DECIMALS: usize = 6;

/// Sentinel printed when the platform cannot split user/system CPU time.
const UNAVAILABLE: &str = "n/a";

/// Render results as an aligned table: one header line, one row per result,
/// in input order.
///
/// Columns are `label`, `user`, `system`, `total` (user + system) and `real`,
/// durations in seconds with six decimal places, right-aligned. Pure function
/// of its input; callers decide where the text goes.
pub fn render_table(results: &[BenchResult]) -> String {
    let headers = ["label", "user", "system", "total", "real"];

    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|r| {
            [
                r.label.clone(),
                format_opt_duration(r.user_time),
                format_opt_duration(r.system_time),
                format_opt_duration(r.total_cpu()),
                format_duration(r.real_time),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, (cell, &width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        // Label column is left-aligned, duration columns right-aligned.
        if i == 0 {
            out.push_str(&format!("{cell:<width$}"));
        } else {
            out.push_str(&format!("{cell:>width$}"));
        }
    }
    out.push('\n');
}

fn format_duration(d: Duration) -> String {
    format!("{:.DECIMALS$}", d.as_secs_f64())
}

fn format_opt_duration(d: Option<Duration>) -> String {
    match d {
        Some(d) => format_duration(d),
        None => UNAVAILABLE.to_string(),
    }
}

/// Trait for benchmark progress reporters.
pub trait Reporter {
    /// Called before any case runs.
    fn suite_start(&self, _suite: &str, _case_count: usize) {}

    /// Called when a case starts.
    fn case_start(&self, _label: &str) {}

    /// Called when a case completes.
    fn case_end(&self, _result: &BenchResult) {}

    /// Called once all cases have completed, with results in run order.
    fn suite_end(&self, _results: &[BenchResult]) {}
}

/// Progress reporter that prints per-case lines to stderr.
///
/// Progress goes to stderr so the stdout table stays clean for capture.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn suite_start(&self, suite: &str, case_count: usize) {
        eprintln!("Benchmark suite: {} ({} case(s))", suite, case_count);
    }

    fn case_start(&self, label: &str) {
        eprint!("  {} ... ", label);
        std::io::stderr().flush().ok();
    }

    fn case_end(&self, result: &BenchResult) {
        eprintln!("{}s", format_duration(result.real_time));
    }

    fn suite_end(&self, results: &[BenchResult]) {
        let total: Duration = results.iter().map(|r| r.real_time).sum();
        eprintln!(
            "Completed {} case(s) in {:.2}s",
            results.len(),
            total.as_secs_f64()
        );
    }
}

/// Reporter that writes the final aligned table to stdout.
pub struct TableReporter;

impl Reporter for TableReporter {
    fn suite_end(&self, results: &[BenchResult]) {
        print!("{}", render_table(results));
    }
}

/// Combines multiple reporters.
pub struct MultiReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl MultiReporter {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        Self { reporters }
    }
}

impl Reporter for MultiReporter {
    fn suite_start(&self, suite: &str, case_count: usize) {
        for r in &self.reporters {
            r.suite_start(suite, case_count);
        }
    }

    fn case_start(&self, label: &str) {
        for r in &self.reporters {
            r.case_start(label);
        }
    }

    fn case_end(&self, result: &BenchResult) {
        for r in &self.reporters {
            r.case_end(result);
        }
    }

    fn suite_end(&self, results: &[BenchResult]) {
        for r in &self.reporters {
            r.suite_end(results);
        }
    }
}
