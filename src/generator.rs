//! Password generator - builds the character set and samples from it.

use rand_core::OsRng;
use secrecy::SecretString;

use crate::charset::CharacterSet;
use crate::config::{ConfigurationError, GenerationConfig};
use crate::sampler::{IndexSampler, ModuloSampler};
use crate::scorer::{StrengthReport, score_strength};

/// Generates a random password from the OS secure random source.
///
/// # Errors
/// - [`ConfigurationError::EmptyCharacterSet`] if no character class is selected
/// - [`ConfigurationError::ZeroLength`] if `config.length` is `0`
pub fn generate_password(config: &GenerationConfig) -> Result<SecretString, ConfigurationError> {
    generate_password_with(config, &mut ModuloSampler::new(OsRng))
}

/// Generates a password drawing every index from `sampler`.
///
/// An index at or above the character set size is reduced modulo that size.
pub fn generate_password_with<S: IndexSampler + ?Sized>(
    config: &GenerationConfig,
    sampler: &mut S,
) -> Result<SecretString, ConfigurationError> {
    let charset = CharacterSet::from_config(config);

    if charset.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: no character class selected");
        return Err(ConfigurationError::EmptyCharacterSet);
    }
    if config.length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: zero length");
        return Err(ConfigurationError::ZeroLength);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(length = config.length, charset_size = charset.len(), "generating password");

    let chars = charset.chars();
    let password: String = (0..config.length)
        .map(|_| chars[sampler.draw_index(chars.len()) % chars.len()])
        .collect();

    Ok(SecretString::new(password.into()))
}

/// Generates a password and scores it, as a UI does on every config change.
pub fn generate_with_report(
    config: &GenerationConfig,
) -> Result<(SecretString, StrengthReport), ConfigurationError> {
    let password = generate_password(config)?;
    let report = score_strength(&password);
    Ok((password, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    /// Yields 0, 1, 2, ... wrapped to the requested bound.
    struct Counter(usize);

    impl IndexSampler for Counter {
        fn draw_index(&mut self, bound: usize) -> usize {
            let index = self.0 % bound;
            self.0 += 1;
            index
        }
    }

    fn no_classes() -> GenerationConfig {
        GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate_password(&GenerationConfig::default()).unwrap();
        assert_eq!(password.expose_secret().chars().count(), 16);
    }

    #[test]
    fn test_generate_members_of_charset() {
        let config = GenerationConfig { length: 64, ..GenerationConfig::default() };
        let charset = CharacterSet::from_config(&config);
        let password = generate_password(&config).unwrap();
        assert!(password.expose_secret().chars().all(|c| charset.contains(c)));
    }

    #[test]
    fn test_generate_no_classes_fails() {
        let result = generate_password(&no_classes());
        assert!(matches!(result, Err(ConfigurationError::EmptyCharacterSet)));
    }

    #[test]
    fn test_generate_empty_charset_wins_over_zero_length() {
        let config = GenerationConfig { length: 0, ..no_classes() };
        assert!(matches!(generate_password(&config), Err(ConfigurationError::EmptyCharacterSet)));
    }

    #[test]
    fn test_generate_zero_length_fails() {
        let config = GenerationConfig { length: 0, ..GenerationConfig::default() };
        assert!(matches!(generate_password(&config), Err(ConfigurationError::ZeroLength)));
    }

    #[test]
    fn test_generate_with_sampler_walks_charset() {
        let config = GenerationConfig {
            length: 12,
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
            exclude_similar: true,
            ..GenerationConfig::default()
        };
        let password = generate_password_with(&config, &mut Counter(0)).unwrap();
        assert_eq!(password.expose_secret(), "234567892345");
    }

    #[test]
    fn test_generate_with_out_of_range_sampler() {
        struct Overshoot;

        impl IndexSampler for Overshoot {
            fn draw_index(&mut self, bound: usize) -> usize {
                bound + 2
            }
        }

        let config = GenerationConfig {
            length: 3,
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
            ..GenerationConfig::default()
        };
        let password = generate_password_with(&config, &mut Overshoot).unwrap();
        assert_eq!(password.expose_secret(), "222");
    }

    #[test]
    fn test_generate_exclusions_respected() {
        let config = GenerationConfig {
            length: 256,
            exclude_similar: true,
            exclude_ambiguous: true,
            ..GenerationConfig::default()
        };
        let password = generate_password(&config).unwrap();
        let forbidden = "0O1lI[]{}|<>/~`";
        assert!(!password.expose_secret().chars().any(|c| forbidden.contains(c)));
    }

    #[test]
    fn test_generate_with_report_scores_generated_password() {
        let config = GenerationConfig { length: 20, ..GenerationConfig::default() };
        let (password, report) = generate_with_report(&config).unwrap();
        assert_eq!(report, score_strength(&password));
        // Length 20 alone earns the full length bonus
        assert!(report.score >= 40);
    }

    #[test]
    fn test_generate_with_report_propagates_error() {
        assert!(matches!(
            generate_with_report(&no_classes()),
            Err(ConfigurationError::EmptyCharacterSet)
        ));
    }

    #[test]
    fn test_generate_is_not_deterministic() {
        let config = GenerationConfig { length: 32, ..GenerationConfig::default() };
        let first = generate_password(&config).unwrap();
        let second = generate_password(&config).unwrap();
        assert_ne!(first.expose_secret(), second.expose_secret());
    }
}
