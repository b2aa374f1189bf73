/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but does not parse is logged and replaced by the default.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse {}={}: {:?}, using default", env_var, raw, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, `None` when missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|raw| raw.parse::<T>().ok())
}
