//! Password scoring sections
//!
//! Each section scores one aspect of a password and contributes
//! feedback for what is missing.

mod entropy;
mod length;
mod uniqueness;
mod variety;

pub use entropy::entropy_section;
pub use length::{BELOW_RECOMMENDED_FEEDBACK, SHORT_FEEDBACK, length_section};
pub use uniqueness::{REPETITIVE_FEEDBACK, uniqueness_section};
pub use variety::{
    NO_DIGIT_FEEDBACK, NO_LOWERCASE_FEEDBACK, NO_SYMBOL_FEEDBACK, NO_UPPERCASE_FEEDBACK,
    character_variety_section,
};

use std::collections::HashSet;

/// Points and feedback contributed by one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionResult {
    pub points: f64,
    pub feedback: Vec<&'static str>,
}

impl SectionResult {
    fn add(&mut self, points: f64) {
        self.points += points;
    }

    fn suggest_if(&mut self, condition: bool, message: &'static str) {
        if condition {
            self.feedback.push(message);
        }
    }
}

/// Facts about a password that every section reads.
///
/// Classes are ASCII: `a-z`, `A-Z`, `0-9`, anything else is a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordProfile {
    pub length: usize,
    pub distinct: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl PasswordProfile {
    pub fn analyze(password: &str) -> Self {
        let mut profile = PasswordProfile {
            length: 0,
            distinct: 0,
            has_lowercase: false,
            has_uppercase: false,
            has_digit: false,
            has_symbol: false,
        };
        let mut seen = HashSet::new();

        for c in password.chars() {
            profile.length += 1;
            seen.insert(c);
            match c {
                'a'..='z' => profile.has_lowercase = true,
                'A'..='Z' => profile.has_uppercase = true,
                '0'..='9' => profile.has_digit = true,
                _ => profile.has_symbol = true,
            }
        }

        profile.distinct = seen.len();
        profile
    }

    /// Distinct characters over length; `0.0` for an empty password.
    pub fn unique_ratio(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.distinct as f64 / self.length as f64
    }
}
