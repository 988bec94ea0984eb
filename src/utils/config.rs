//! Environment-variable helpers backing [`Config`](crate::config::Config).
//!
//! All client settings come in through `ME_*` variables; these helpers parse
//! them into whatever `FromStr` type the config field wants.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is unset or does not parse
///
/// A set-but-unparsable value is logged before falling back, since it almost
/// always means a typo in the `.env` file.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an optional environment variable
///
/// Returns `None` when the variable is unset or does not parse; used for the
/// `ME_ACCESS_TOKEN`/`ME_REFRESH_TOKEN` pair where absence simply means the
/// SMS challenge has to run.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}
