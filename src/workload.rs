//! The measured workload: front-insert/back-remove churn on a `Vec`.

/// Default cycle count per benchmark case.
///
/// Deliberately fixed regardless of array size: total runtime then depends on
/// size only through the per-cycle shift cost, which is the effect under
/// measurement.
pub const DEFAULT_REPETITIONS: u64 = 1_000_000;

/// Sentinel element value; the contents never matter, only the shifts.
const SENTINEL: u64 = 0;

/// Run `repetitions` churn cycles on a vector of initial length `size` and
/// return the vector.
///
/// Each cycle inserts one sentinel at index 0 (shifting every existing element
/// one slot toward the back) and pops the last element, so the length is
/// unchanged across cycles. An out-of-memory condition during the initial
/// allocation aborts the process; that is the only failure mode and it is not
/// recovered.
pub fn churn(size: usize, repetitions: u64) -> Vec<u64> {
    let mut array = vec![SENTINEL; size];
    for _ in 0..repetitions {
        array.insert(0, SENTINEL);
        array.pop();
    }
    array
}

/// Run one unit of work, discarding the array.
///
/// The result is routed through `black_box` so the optimizer cannot elide the
/// shifts being measured.
pub fn run(size: usize, repetitions: u64) {
    std::hint::black_box(churn(size, repetitions));
}
