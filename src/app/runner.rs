use crate::http;
use crate::metrics::RunTracker;

use super::summary::print_summary;

/// Issues `repeat` strictly sequential requests against `url` and prints
/// the aggregate statistics report. Individual request failures are logged
/// and never abort the run.
pub(crate) async fn run_profile(url: &str, repeat: u64, verbose: bool) {
    if verbose {
        println!("Verbose mode on; peer addresses will be printed.");
        println!("Making {repeat} request(s) to {url}");
        println!();
    }

    let mut tracker = RunTracker::new(repeat);
    for _ in 0..repeat {
        let outcome = http::execute(url, verbose).await;
        if let Err(error) = &outcome.result {
            tracing::error!("{error}");
        }
        tracker.record(&outcome);
    }

    print_summary(&tracker.finalize());
}
