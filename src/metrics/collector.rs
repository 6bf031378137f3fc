use std::collections::HashSet;

use crate::http::{RESPONSE_BUFFER_SIZE, is_error_code};

use super::types::RequestOutcome;

/// Folds per-request outcomes into running aggregates.
///
/// Trackers start from the sentinels the report logic later guards against:
/// fastest at `u64::MAX`, smallest response at the read-buffer capacity.
#[derive(Debug)]
pub struct RunTracker {
    requested: u64,
    successes: u64,
    fastest_micros: u64,
    slowest_micros: u64,
    smallest_response_bytes: u64,
    largest_response_bytes: u64,
    times_micros: Vec<u64>,
    error_codes: HashSet<String>,
}

/// Reduced statistics of one run, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: u64,
    pub fastest_micros: u64,
    pub slowest_micros: u64,
    pub mean_micros: u64,
    pub median_micros: u64,
    pub success_percent: u64,
    pub smallest_response_bytes: u64,
    pub largest_response_bytes: u64,
    pub error_codes: Vec<String>,
}

impl RunTracker {
    #[must_use]
    pub fn new(requested: u64) -> Self {
        Self {
            requested,
            successes: 0,
            fastest_micros: u64::MAX,
            slowest_micros: 0,
            smallest_response_bytes: RESPONSE_BUFFER_SIZE as u64,
            largest_response_bytes: 0,
            times_micros: Vec::new(),
            error_codes: HashSet::new(),
        }
    }

    pub fn record(&mut self, outcome: &RequestOutcome) {
        if let Some(elapsed) = outcome.elapsed_micros {
            self.fastest_micros = self.fastest_micros.min(elapsed);
            self.slowest_micros = self.slowest_micros.max(elapsed);
            self.times_micros.push(elapsed);
        }

        if let Ok(response) = &outcome.result {
            self.successes = self.successes.saturating_add(1);
            self.smallest_response_bytes = self
                .smallest_response_bytes
                .min(response.response_bytes);
            self.largest_response_bytes = self
                .largest_response_bytes
                .max(response.response_bytes);
            if let Some(code) = response.status_code.as_deref() {
                if is_error_code(code) {
                    self.error_codes.insert(code.to_owned());
                }
            }
        }
    }

    /// Sorts the collected samples and reduces them into a summary.
    ///
    /// Runs with no timed request report zeroed times, and runs with no
    /// successful read report zeroed sizes; the sentinels never leak into
    /// the report and an empty run cannot divide by zero.
    #[must_use]
    pub fn finalize(self) -> RunSummary {
        let mut times = self.times_micros;
        times.sort_unstable();
        let timed = times.len() as u64;

        let mean_micros = times.iter().sum::<u64>().checked_div(timed).unwrap_or(0);
        let median_micros = median(&times);
        let (fastest_micros, slowest_micros) = if timed > 0 {
            (self.fastest_micros, self.slowest_micros)
        } else {
            (0, 0)
        };
        let (smallest_response_bytes, largest_response_bytes) = if self.successes > 0 {
            (self.smallest_response_bytes, self.largest_response_bytes)
        } else {
            (0, 0)
        };
        let success_percent = self
            .successes
            .saturating_mul(100)
            .checked_div(self.requested)
            .unwrap_or(0);

        let mut error_codes: Vec<String> = self.error_codes.into_iter().collect();
        error_codes.sort_unstable();

        RunSummary {
            requested: self.requested,
            fastest_micros,
            slowest_micros,
            mean_micros,
            median_micros,
            success_percent,
            smallest_response_bytes,
            largest_response_bytes,
            error_codes,
        }
    }
}

/// Middle element for odd counts, truncated average of the two middle
/// elements for even counts.
fn median(sorted: &[u64]) -> u64 {
    let count = sorted.len();
    if count == 0 {
        return 0;
    }
    let middle = count / 2;
    if count % 2 == 0 {
        let lower = sorted.get(middle.saturating_sub(1)).copied().unwrap_or(0);
        let upper = sorted.get(middle).copied().unwrap_or(0);
        lower.saturating_add(upper) / 2
    } else {
        sorted.get(middle).copied().unwrap_or(0)
    }
}
