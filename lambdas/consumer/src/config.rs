use std::{env, str::FromStr};

use thiserror::Error;
use tracing::Level;

const DEFAULT_PREVIEW_CHARS: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub log_level: Level,
    /// Characters of the decoded value shown in the preview line
    pub preview_chars: usize,
    pub hex_dump: bool,
    /// 0 dumps the whole value
    pub hex_dump_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            hex_dump: true,
            hex_dump_bytes: 0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            log_level: parse(&lookup, "LOG_LEVEL", defaults.log_level)?,
            preview_chars: parse(&lookup, "PREVIEW_CHARS", defaults.preview_chars)?,
            hex_dump: parse_flag(&lookup, "HEX_DUMP", defaults.hex_dump)?,
            hex_dump_bytes: parse(&lookup, "HEX_DUMP_BYTES", defaults.hex_dump_bytes)?,
        })
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue { name, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("LOG_LEVEL", "debug"),
            ("PREVIEW_CHARS", "20"),
            ("HEX_DUMP", "off"),
            ("HEX_DUMP_BYTES", "64"),
        ])
        .unwrap();

        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.preview_chars, 20);
        assert!(!config.hex_dump);
        assert_eq!(config.hex_dump_bytes, 64);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("PREVIEW_CHARS", "lots")]),
            Err(ConfigError::InvalidValue {
                name: "PREVIEW_CHARS",
                value: "lots".to_string()
            })
        );
        assert!(config_from(&[("HEX_DUMP", "maybe")]).is_err());
        assert!(config_from(&[("LOG_LEVEL", "loud")]).is_err());
    }
}
