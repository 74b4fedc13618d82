use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable and parses it, falling back to `default`
///
/// Surrounding whitespace is ignored. An unset or blank variable yields the
/// default silently, an unparseable one yields the default with a warning.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        _ => default,
    }
}
