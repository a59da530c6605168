//! # shiftbench
//!
//! A small benchmark harness measuring front-insert/back-remove churn on a
//! growable array across several initial sizes.
//!
//! Inserting at index 0 of a `Vec` shifts every existing element one slot
//! toward the back, so a fixed number of insert-then-pop cycles gets more
//! expensive as the initial length grows. The harness times that workload per
//! configured size, splitting user CPU, system CPU and wall-clock time, and
//! prints an aligned table.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shiftbench::{BenchHarness, HarnessConfig};
//!
//! let mut harness = BenchHarness::with_config(
//!     "unshift",
//!     HarnessConfig::new().repetitions(1_000_000),
//! );
//! harness.case(60, 60);
//! harness.case(70, 70);
//!
//! let results = harness.run();
//! assert_eq!(results.len(), 2);
//! ```
//!
//! Each case runs to completion on the calling thread before the next starts;
//! results come back in declaration order.

mod config;
mod harness;
mod report;
mod result;
mod timer;
mod workload;

pub mod intake;

pub use config::HarnessConfig;
pub use harness::BenchHarness;
pub use report::{render_table, ConsoleReporter, MultiReporter, Reporter, TableReporter};
pub use result::{BenchCase, BenchResult};
pub use timer::{measure, TimingSample};
pub use workload::{churn, DEFAULT_REPETITIONS};
