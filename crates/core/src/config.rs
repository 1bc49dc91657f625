//! Environment variable parsing shared by the server and database configs.

use std::str::FromStr;

/// A configuration value that is present but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Read `key` from the environment, falling back to `default` when unset.
pub fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse `key` from the environment, falling back to `default` when unset.
pub fn env_parse<T: FromStr>(
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw, expected),
        Err(_) => Ok(default),
    }
}

/// Parse a raw configuration value, reporting the key on failure.
pub fn parse_value<T: FromStr>(
    key: &'static str,
    raw: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError {
        key,
        expected,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_value() {
        let port: u16 = parse_value("PORT", "8000", "u16").unwrap();
        assert_eq!(port, 8000);
    }

    #[test]
    fn trims_whitespace() {
        let port: u16 = parse_value("PORT", " 8080 ", "u16").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = parse_value::<u16>("PORT", "eighty", "u16").unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }

    #[test]
    fn unset_key_uses_default() {
        let value: u32 = env_parse("NOTES_TEST_SURELY_UNSET_KEY", 7, "u32").unwrap();
        assert_eq!(value, 7);
    }
}
