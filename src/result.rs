//! Benchmark case and result types.

use crate::timer::TimingSample;
use crate::workload::DEFAULT_REPETITIONS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One declared benchmark configuration.
///
/// Immutable once declared; the harness runs cases in declaration order and
/// never mutates or deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchCase {
    /// Display label for the result row. Integer labels are accepted via
    /// `Display` at construction.
    pub label: String,
    /// Initial array length. Zero is valid and measures churn on an
    /// initially empty array.
    pub size: usize,
    /// Churn cycles to run for this case.
    pub repetitions: u64,
}

impl BenchCase {
    /// Declare a case with the default repetition count.
    pub fn new(label: impl ToString, size: usize) -> Self {
        Self {
            label: label.to_string(),
            size,
            repetitions: DEFAULT_REPETITIONS,
        }
    }

    /// Override the repetition count.
    pub fn repetitions(mut self, repetitions: u64) -> Self {
        self.repetitions = repetitions;
        self
    }
}

/// Timing result for one completed case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    /// Label copied from the case that produced this result.
    pub label: String,
    /// User CPU time; `None` when the platform cannot split CPU time.
    #[serde(with = "opt_duration_serde")]
    pub user_time: Option<Duration>,
    /// System CPU time; `None` when the platform cannot split CPU time.
    #[serde(with = "opt_duration_serde")]
    pub system_time: Option<Duration>,
    /// Wall-clock time.
    #[serde(with = "duration_serde")]
    pub real_time: Duration,
}

impl BenchResult {
    /// Tag a timing sample with the label of the case it measured.
    pub fn from_sample(label: impl Into<String>, sample: TimingSample) -> Self {
        Self {
            label: label.into(),
            user_time: sample.user_time,
            system_time: sample.system_time,
            real_time: sample.real_time,
        }
    }

    /// Combined CPU time (user + system), if the split is available.
    pub fn total_cpu(&self) -> Option<Duration> {
        Some(self.user_time? + self.system_time?)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_nanos().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let nanos = u128::deserialize(d)?;
        Ok(Duration::from_nanos(nanos as u64))
    }
}

mod opt_duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        d.map(|d| d.as_nanos()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let nanos: Option<u128> = Option::deserialize(d)?;
        Ok(nanos.map(|n| Duration::from_nanos(n as u64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_integer_labels() {
        let case = BenchCase::new(60, 60);
        assert_eq!(case.label, "60");
        assert_eq!(case.size, 60);
        assert_eq!(case.repetitions, DEFAULT_REPETITIONS);
    }

    #[test]
    fn should_override_repetitions_with_builder() {
        let case = BenchCase::new("small", 10).repetitions(1000);
        assert_eq!(case.repetitions, 1000);
    }

    #[test]
    fn should_sum_cpu_times_when_both_present() {
        let result = BenchResult {
            label: "x".to_string(),
            user_time: Some(Duration::from_millis(100)),
            system_time: Some(Duration::from_millis(25)),
            real_time: Duration::from_millis(130),
        };
        assert_eq!(result.total_cpu(), Some(Duration::from_millis(125)));
    }

    #[test]
    fn should_round_trip_through_json() {
        let result = BenchResult {
            label: "70".to_string(),
            user_time: Some(Duration::from_micros(1500)),
            system_time: None,
            real_time: Duration::from_micros(1600),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: BenchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, "70");
        assert_eq!(back.user_time, Some(Duration::from_micros(1500)));
        assert_eq!(back.system_time, None);
        assert_eq!(back.real_time, Duration::from_micros(1600));
    }
}
