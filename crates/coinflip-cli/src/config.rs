//! Runner configuration read from the environment.

use std::num::NonZeroU32;
use std::str::FromStr;

use coinflip_core::bound::Bound;
use coinflip_core::sampler::AttemptLimit;

use crate::error::AppError;

const BOUND_VAR: &str = "COINFLIP_BOUND";
const ITERATIONS_VAR: &str = "COINFLIP_ITERATIONS";
const MAX_ATTEMPTS_VAR: &str = "COINFLIP_MAX_ATTEMPTS";
const SEED_VAR: &str = "COINFLIP_SEED";

const DEFAULT_BOUND: u32 = 10;
const DEFAULT_ITERATIONS: NonZeroU32 = NonZeroU32::new(10_000).unwrap();

/// Settings for one report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Inclusive upper bound to sample.
    pub bound: Bound,
    /// Draws per report.
    pub iterations: NonZeroU32,
    /// Rejection cap; unbounded unless `COINFLIP_MAX_ATTEMPTS` is set.
    pub attempt_limit: AttemptLimit,
    /// Seed for a reproducible bit stream; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bound = match lookup(BOUND_VAR) {
            Some(raw) => raw
                .parse::<Bound>()
                .map_err(|e| AppError::Config(format!("{BOUND_VAR}: {e}")))?,
            None => Bound::from(DEFAULT_BOUND),
        };

        let iterations = parse_var::<NonZeroU32>(&lookup, ITERATIONS_VAR, "a positive u32")?
            .unwrap_or(DEFAULT_ITERATIONS);

        let attempt_limit =
            parse_var::<NonZeroU32>(&lookup, MAX_ATTEMPTS_VAR, "a positive u32")?
                .map_or(AttemptLimit::Unbounded, AttemptLimit::AtMost);

        let seed = parse_var::<u64>(&lookup, SEED_VAR, "a valid u64")?;

        Ok(Self {
            bound,
            iterations,
            attempt_limit,
            seed,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    expected: &str,
) -> Result<Option<T>, AppError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| AppError::Config(format!("{key} must be {expected}, got {raw:?}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bound.get(), 10);
        assert_eq!(config.iterations.get(), 10_000);
        assert_eq!(config.attempt_limit, AttemptLimit::Unbounded);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("COINFLIP_BOUND", "250"),
            ("COINFLIP_ITERATIONS", "500"),
            ("COINFLIP_MAX_ATTEMPTS", "16"),
            ("COINFLIP_SEED", "99"),
        ])
        .unwrap();
        assert_eq!(config.bound.get(), 250);
        assert_eq!(config.iterations.get(), 500);
        assert_eq!(
            config.attempt_limit,
            AttemptLimit::AtMost(NonZeroU32::new(16).unwrap())
        );
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_negative_bound_is_rejected() {
        let err = config_from(&[("COINFLIP_BOUND", "-1")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.starts_with("COINFLIP_BOUND")));
    }

    #[test]
    fn test_fractional_bound_is_rejected() {
        let err = config_from(&[("COINFLIP_BOUND", "2.5")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_zero_iterations_are_rejected() {
        let err = config_from(&[("COINFLIP_ITERATIONS", "0")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("COINFLIP_ITERATIONS")));
    }

    #[test]
    fn test_zero_max_attempts_are_rejected() {
        let err = config_from(&[("COINFLIP_MAX_ATTEMPTS", "0")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let err = config_from(&[("COINFLIP_SEED", "not-a-number")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("COINFLIP_SEED")));
    }
}
