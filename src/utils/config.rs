/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, treating an empty or blank value as unset
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable is unset, blank or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_env(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Returns the value of the first variable of `env_vars` that is set and not blank
///
/// Used for settings that have several conventional names, such as the
/// token which may be exported as `GITHUB_TOKEN` or `GH_TOKEN`.
pub fn get_first_env(env_vars: &[&str]) -> Option<String> {
    env_vars.iter().find_map(|name| read_env(name))
}
