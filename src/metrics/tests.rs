use super::{RequestOutcome, ResponseSummary, RunTracker};
use crate::error::{AppError, AppResult, RequestError};

fn timed_success(elapsed_micros: u64, response_bytes: u64, status: &str) -> RequestOutcome {
    RequestOutcome::success(
        elapsed_micros,
        ResponseSummary {
            response_bytes,
            status_code: Some(status.to_owned()),
        },
    )
}

fn connect_failure() -> RequestOutcome {
    RequestOutcome::aborted(RequestError::Connect {
        host: "localhost".to_owned(),
        source: None,
    })
}

fn receive_failure(elapsed_micros: u64) -> RequestOutcome {
    RequestOutcome::receive_error(
        elapsed_micros,
        RequestError::Receive {
            host: "localhost".to_owned(),
            source: std::io::Error::other("connection reset"),
        },
    )
}

#[test]
fn median_of_odd_sample_count_is_middle_element() -> AppResult<()> {
    let mut tracker = RunTracker::new(3);
    for elapsed in [9, 1, 5] {
        tracker.record(&timed_success(elapsed, 100, "200"));
    }

    let summary = tracker.finalize();
    if summary.median_micros != 5 {
        return Err(AppError::validation(format!(
            "Expected median 5, got {}",
            summary.median_micros
        )));
    }
    Ok(())
}

#[test]
fn median_of_even_sample_count_truncates_middle_average() -> AppResult<()> {
    let mut tracker = RunTracker::new(4);
    for elapsed in [10, 3, 1, 2] {
        tracker.record(&timed_success(elapsed, 100, "200"));
    }

    let summary = tracker.finalize();
    if summary.median_micros != 2 {
        return Err(AppError::validation(format!(
            "Expected median 2, got {}",
            summary.median_micros
        )));
    }
    Ok(())
}

#[test]
fn mean_truncates_integer_division() -> AppResult<()> {
    let mut tracker = RunTracker::new(2);
    tracker.record(&timed_success(1, 100, "200"));
    tracker.record(&timed_success(2, 100, "200"));

    let summary = tracker.finalize();
    if summary.mean_micros != 1 {
        return Err(AppError::validation(format!(
            "Expected mean 1, got {}",
            summary.mean_micros
        )));
    }
    Ok(())
}

#[test]
fn fastest_and_slowest_track_extremes() -> AppResult<()> {
    let mut tracker = RunTracker::new(3);
    for elapsed in [40, 7, 23] {
        tracker.record(&timed_success(elapsed, 100, "200"));
    }

    let summary = tracker.finalize();
    if summary.fastest_micros != 7 || summary.slowest_micros != 40 {
        return Err(AppError::validation(format!(
            "Expected 7/40, got {}/{}",
            summary.fastest_micros, summary.slowest_micros
        )));
    }
    Ok(())
}

#[test]
fn success_percentage_divides_by_requested_count() -> AppResult<()> {
    let mut tracker = RunTracker::new(4);
    for _ in 0..3 {
        tracker.record(&timed_success(10, 100, "200"));
    }
    tracker.record(&connect_failure());

    let summary = tracker.finalize();
    if summary.success_percent != 75 {
        return Err(AppError::validation(format!(
            "Expected 75%, got {}%",
            summary.success_percent
        )));
    }
    Ok(())
}

#[test]
fn run_without_successes_reports_zeros() -> AppResult<()> {
    let mut tracker = RunTracker::new(5);
    for _ in 0..5 {
        tracker.record(&connect_failure());
    }

    let summary = tracker.finalize();
    if summary.success_percent != 0 {
        return Err(AppError::validation("Expected 0% success"));
    }
    if summary.fastest_micros != 0 || summary.slowest_micros != 0 {
        return Err(AppError::validation("Expected zeroed times"));
    }
    if summary.mean_micros != 0 || summary.median_micros != 0 {
        return Err(AppError::validation("Expected zeroed mean/median"));
    }
    if summary.smallest_response_bytes != 0 || summary.largest_response_bytes != 0 {
        return Err(AppError::validation("Expected zeroed sizes"));
    }
    Ok(())
}

#[test]
fn receive_failure_keeps_timing_but_not_success() -> AppResult<()> {
    let mut tracker = RunTracker::new(1);
    tracker.record(&receive_failure(7));

    let summary = tracker.finalize();
    if summary.success_percent != 0 {
        return Err(AppError::validation("Expected 0% success"));
    }
    if summary.fastest_micros != 7 || summary.slowest_micros != 7 {
        return Err(AppError::validation("Expected the timing sample to be kept"));
    }
    if summary.mean_micros != 7 || summary.median_micros != 7 {
        return Err(AppError::validation("Expected mean/median over the sample"));
    }
    Ok(())
}

#[test]
fn response_sizes_track_extremes_of_successful_reads() -> AppResult<()> {
    let mut tracker = RunTracker::new(3);
    tracker.record(&timed_success(10, 120, "200"));
    tracker.record(&timed_success(10, 50, "200"));
    tracker.record(&receive_failure(10));

    let summary = tracker.finalize();
    if summary.smallest_response_bytes != 50 || summary.largest_response_bytes != 120 {
        return Err(AppError::validation(format!(
            "Expected 50/120, got {}/{}",
            summary.smallest_response_bytes, summary.largest_response_bytes
        )));
    }
    Ok(())
}

#[test]
fn error_codes_deduplicate_and_ignore_success_classes() -> AppResult<()> {
    let mut tracker = RunTracker::new(5);
    tracker.record(&timed_success(10, 100, "404"));
    tracker.record(&timed_success(10, 100, "404"));
    tracker.record(&timed_success(10, 100, "500"));
    tracker.record(&timed_success(10, 100, "200"));
    tracker.record(&timed_success(10, 100, "302"));

    let summary = tracker.finalize();
    if summary.error_codes != ["404", "500"] {
        return Err(AppError::validation(format!(
            "Unexpected error codes: {:?}",
            summary.error_codes
        )));
    }
    Ok(())
}

#[test]
fn missing_status_code_still_counts_as_success() -> AppResult<()> {
    let mut tracker = RunTracker::new(1);
    tracker.record(&RequestOutcome::success(
        4,
        ResponseSummary {
            response_bytes: 8,
            status_code: None,
        },
    ));

    let summary = tracker.finalize();
    if summary.success_percent != 100 {
        return Err(AppError::validation("Expected 100% success"));
    }
    if !summary.error_codes.is_empty() {
        return Err(AppError::validation("Expected no error codes"));
    }
    Ok(())
}
