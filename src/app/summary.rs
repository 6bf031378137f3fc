use crate::metrics::RunSummary;

pub(crate) fn print_summary(summary: &RunSummary) {
    println!();
    println!("STATISTICS:");
    println!("Number of Requests: {}", summary.requested);
    println!("Fastest Time: {} microseconds", summary.fastest_micros);
    println!("Slowest Time: {} microseconds", summary.slowest_micros);
    println!("Mean Time: {} microseconds", summary.mean_micros);
    println!("Median Time: {} microseconds", summary.median_micros);
    println!(
        "Percentage of Successful Requests: {}%",
        summary.success_percent
    );
    println!(
        "Size of smallest response: {} bytes",
        summary.smallest_response_bytes
    );
    println!(
        "Size of largest response: {} bytes",
        summary.largest_response_bytes
    );
    println!("Error Codes (4xx and 5xx codes):");
    for code in &summary.error_codes {
        println!("{code}");
    }
}
