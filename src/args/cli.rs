use clap::Parser;

use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Sequential HTTP/1.0 request profiler - resolves a target, issues raw GET requests one at a time, and reports latency and outcome statistics."
)]
pub struct ProfilerArgs {
    /// Target URL to benchmark
    #[arg(long, short)]
    pub url: Option<String>,

    /// Number of requests to issue against the URL; nothing runs without it
    #[arg(long = "profile", short = 'p')]
    pub profile: Option<PositiveU64>,

    /// Print the resolved peer address for every request
    #[arg(long, short)]
    pub verbose: bool,

    /// Path to a TOML or JSON config file (defaults to reqprobe.toml/reqprobe.json)
    #[arg(long)]
    pub config: Option<String>,
}
