//! Generation configuration and its validation errors.

use thiserror::Error;

pub const ENV_LENGTH: &str = "PWD_FORGE_LENGTH";
pub const ENV_UPPERCASE: &str = "PWD_FORGE_UPPERCASE";
pub const ENV_LOWERCASE: &str = "PWD_FORGE_LOWERCASE";
pub const ENV_NUMBERS: &str = "PWD_FORGE_NUMBERS";
pub const ENV_SYMBOLS: &str = "PWD_FORGE_SYMBOLS";
pub const ENV_EXCLUDE_SIMILAR: &str = "PWD_FORGE_EXCLUDE_SIMILAR";
pub const ENV_EXCLUDE_AMBIGUOUS: &str = "PWD_FORGE_EXCLUDE_AMBIGUOUS";

const DEFAULT_LENGTH: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("At least one character type must be selected")]
    EmptyCharacterSet,
    #[error("Password length must be at least 1")]
    ZeroLength,
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
}

/// Character-class policy for a generated password.
///
/// `exclude_similar` applies to letters and digits only, `exclude_ambiguous`
/// to symbols only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationConfig {
    /// Returns `true` if at least one character class is selected.
    pub fn has_character_class(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }

    /// Builds a configuration from environment variables.
    ///
    /// Unset variables keep their [`Default`] value:
    /// - `PWD_FORGE_LENGTH`: positive integer
    /// - `PWD_FORGE_UPPERCASE`, `PWD_FORGE_LOWERCASE`, `PWD_FORGE_NUMBERS`,
    ///   `PWD_FORGE_SYMBOLS`, `PWD_FORGE_EXCLUDE_SIMILAR`,
    ///   `PWD_FORGE_EXCLUDE_AMBIGUOUS`: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidEnvValue`] for a malformed value.
    /// A length of `0` is rejected with [`ConfigurationError::ZeroLength`].
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let defaults = Self::default();

        let length = match read_env(ENV_LENGTH) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigurationError::InvalidEnvValue { key: ENV_LENGTH, value: raw })?,
            None => defaults.length,
        };
        if length == 0 {
            return Err(ConfigurationError::ZeroLength);
        }

        let config = Self {
            length,
            include_uppercase: env_flag(ENV_UPPERCASE, defaults.include_uppercase)?,
            include_lowercase: env_flag(ENV_LOWERCASE, defaults.include_lowercase)?,
            include_numbers: env_flag(ENV_NUMBERS, defaults.include_numbers)?,
            include_symbols: env_flag(ENV_SYMBOLS, defaults.include_symbols)?,
            exclude_similar: env_flag(ENV_EXCLUDE_SIMILAR, defaults.exclude_similar)?,
            exclude_ambiguous: env_flag(ENV_EXCLUDE_AMBIGUOUS, defaults.exclude_ambiguous)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?config, "generation config loaded from environment");

        Ok(config)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_flag(key: &'static str, default: bool) -> Result<bool, ConfigurationError> {
    let Some(raw) = read_env(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigurationError::InvalidEnvValue { key, value: raw }),
    }
}
