use crate::args::{PositiveU64, ProfilerArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills argument values the CLI left unset; CLI flags always win.
pub fn apply_config(args: &mut ProfilerArgs, config: ConfigFile) -> AppResult<()> {
    if args.url.is_none() {
        args.url = config.url;
    }

    if args.profile.is_none() {
        if let Some(value) = config.profile {
            let profile = PositiveU64::try_from(value).map_err(|source| {
                AppError::config(ConfigError::ProfileMustBePositive { source })
            })?;
            args.profile = Some(profile);
        }
    }

    if config.verbose.unwrap_or(false) {
        args.verbose = true;
    }

    Ok(())
}
