//! Password generation and strength scoring library
//!
//! Generates random passwords from a character-class policy using the
//! OS secure random source, and scores password strength with an
//! additive heuristic.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable scoring over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`GenerationConfig::from_env`]; unset variables keep their defaults.
//!
//! - `PWD_FORGE_LENGTH`: password length (default: `16`)
//! - `PWD_FORGE_UPPERCASE`, `PWD_FORGE_LOWERCASE`, `PWD_FORGE_NUMBERS`,
//!   `PWD_FORGE_SYMBOLS`: include a character class (default: `true`)
//! - `PWD_FORGE_EXCLUDE_SIMILAR`, `PWD_FORGE_EXCLUDE_AMBIGUOUS`:
//!   exclusion policies (default: `false`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{GenerationConfig, generate_password, label_for_level, score_strength};
//!
//! let config = GenerationConfig { length: 20, exclude_similar: true, ..Default::default() };
//! let password = generate_password(&config).expect("at least one class is selected");
//!
//! let report = score_strength(&password);
//! println!("Score: {}", report.score);
//! println!("Strength: {}", label_for_level(report.level.as_str()));
//! for suggestion in &report.feedback {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod charset;
mod config;
mod generator;
mod level;
mod sampler;
mod scorer;
mod sections;

// Public API
pub use charset::{CharClass, CharacterSet};
pub use config::{ConfigurationError, GenerationConfig};
pub use generator::{generate_password, generate_password_with, generate_with_report};
pub use level::{StrengthLevel, UnknownLevel, label_for_level};
pub use sampler::{IndexSampler, ModuloSampler, RejectionSampler};
pub use scorer::{StrengthReport, score_strength};

#[cfg(feature = "async")]
pub use scorer::{DEBOUNCE, score_strength_tx};

/// Feedback messages a [`StrengthReport`] can contain, in report order.
pub mod feedback {
    pub use crate::sections::{
        BELOW_RECOMMENDED_FEEDBACK, NO_DIGIT_FEEDBACK, NO_LOWERCASE_FEEDBACK, NO_SYMBOL_FEEDBACK,
        NO_UPPERCASE_FEEDBACK, REPETITIVE_FEEDBACK, SHORT_FEEDBACK,
    };
}

pub use secrecy::{ExposeSecret, SecretString};
