use std::{env, path::PathBuf};

use xorshift_core::constants::{DEFAULT_COUNT, DEFAULT_STATE0_FILE, DEFAULT_STATE1_FILE};
use xorshift_core::SeedPolicy;

pub const COUNT_ENV: &str = "XORSHIFT_COUNT";
pub const ALLOW_ZERO_SEED_ENV: &str = "XORSHIFT_ALLOW_ZERO_SEED";
pub const STATE0_PATH_ENV: &str = "XORSHIFT_STATE0_PATH";
pub const STATE1_PATH_ENV: &str = "XORSHIFT_STATE1_PATH";

/// Defaults for a harness run. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub count: usize,
    pub seed_policy: SeedPolicy,
    pub state0_path: PathBuf,
    pub state1_path: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed_policy: SeedPolicy::Reject,
            state0_path: PathBuf::from(DEFAULT_STATE0_FILE),
            state1_path: PathBuf::from(DEFAULT_STATE1_FILE),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed_policy = if read_bool(&lookup, ALLOW_ZERO_SEED_ENV, false) {
            SeedPolicy::Permit
        } else {
            SeedPolicy::Reject
        };

        Self {
            count: read_usize_allow_zero(&lookup, COUNT_ENV, defaults.count),
            seed_policy,
            state0_path: read_path(&lookup, STATE0_PATH_ENV, defaults.state0_path),
            state1_path: read_path(&lookup, STATE1_PATH_ENV, defaults.state1_path),
        }
    }
}

fn read_usize_allow_zero(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: usize,
) -> usize {
    match lookup(name) {
        None => default,
        Some(value) => value.trim().parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!("{name}={value:?} is not a valid count. Falling back to {default}.");
            default
        }),
    }
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: bool) -> bool {
    let Some(value) = lookup(name) else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        _ => {
            tracing::warn!("{name}={value:?} is not a boolean. Falling back to {default}.");
            default
        }
    }
}

fn read_path(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: PathBuf) -> PathBuf {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> HarnessConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HarnessConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_match_reference_harness() {
        let config = config_from(&[]);
        assert_eq!(config.count, 100);
        assert_eq!(config.seed_policy, SeedPolicy::Reject);
        assert_eq!(config.state0_path, PathBuf::from("state0.txt"));
        assert_eq!(config.state1_path, PathBuf::from("state1.txt"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (COUNT_ENV, "0"),
            (ALLOW_ZERO_SEED_ENV, "YES"),
            (STATE0_PATH_ENV, "out/s0.txt"),
            (STATE1_PATH_ENV, " out/s1.txt "),
        ]);
        assert_eq!(config.count, 0);
        assert_eq!(config.seed_policy, SeedPolicy::Permit);
        assert_eq!(config.state0_path, PathBuf::from("out/s0.txt"));
        assert_eq!(config.state1_path, PathBuf::from("out/s1.txt"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            (COUNT_ENV, "-3"),
            (ALLOW_ZERO_SEED_ENV, "maybe"),
            (STATE0_PATH_ENV, "   "),
        ]);
        assert_eq!(config, HarnessConfig::default());
    }
}
