//! Optional config file support (`reqprobe.toml` / `reqprobe.json`).
mod apply;
mod loader;
mod types;


pub use apply::apply_config;
pub use loader::load_config;
pub use types::ConfigFile;
