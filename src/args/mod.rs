//! CLI argument types and parsing helpers.
mod cli;
mod types;


pub use cli::ProfilerArgs;
pub use types::PositiveU64;
