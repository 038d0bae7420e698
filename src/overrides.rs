use crate::constants::{ATTR_BURST, ATTR_SEED, ATTR_TOKENS};
use backdrop_core::{ConfigError, EngineConfig};
use std::str::FromStr;

fn parse_attr<T: FromStr>(
    attr: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match attr(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Parse { field: name, raw }),
    }
}

/// Layer `data-*` overrides from the canvas element onto `config`.
///
/// `attr` looks up an attribute by name; absent attributes keep the
/// profile's value. The merged config is validated before it is returned.
pub fn apply_overrides(
    mut config: EngineConfig,
    attr: impl Fn(&str) -> Option<String>,
) -> Result<EngineConfig, ConfigError> {
    if let Some(seed) = parse_attr::<u64>(&attr, ATTR_SEED)? {
        config.seed = Some(seed);
    }
    if let Some(n) = parse_attr::<usize>(&attr, ATTR_TOKENS)? {
        config.token_count = n;
    }
    if let Some(n) = parse_attr::<usize>(&attr, ATTR_BURST)? {
        config.sparkle_burst = n;
    }
    config.validate()?;
    Ok(config)
}
