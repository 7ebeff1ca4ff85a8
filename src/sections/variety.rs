//! Character variety section - checks for lowercase, uppercase, digits, symbols.

use super::{PasswordProfile, SectionResult};

const POINTS_PER_CLASS: f64 = 10.0;

pub const NO_LOWERCASE_FEEDBACK: &str = "Add lowercase letters";
pub const NO_UPPERCASE_FEEDBACK: &str = "Add uppercase letters";
pub const NO_DIGIT_FEEDBACK: &str = "Add numbers";
pub const NO_SYMBOL_FEEDBACK: &str = "Add symbols";

/// +10 for each character class present.
pub fn character_variety_section(profile: &PasswordProfile) -> SectionResult {
    let mut result = SectionResult::default();

    let classes = [
        (profile.has_lowercase, NO_LOWERCASE_FEEDBACK),
        (profile.has_uppercase, NO_UPPERCASE_FEEDBACK),
        (profile.has_digit, NO_DIGIT_FEEDBACK),
        (profile.has_symbol, NO_SYMBOL_FEEDBACK),
    ];

    for (present, missing) in classes {
        if present {
            result.add(POINTS_PER_CLASS);
        }
        result.suggest_if(!present, missing);
    }
    result
}
